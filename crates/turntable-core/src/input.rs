/// Identity of the device pointer that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Pointer(i32),
    Touch(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A device event already reduced to the fields the controller needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawInput {
    pub source: PointerSource,
    pub phase: InputPhase,
    pub x: f64,
    pub timestamp_ms: f64,
}

impl RawInput {
    pub fn new(source: PointerSource, phase: InputPhase, x: f64, timestamp_ms: f64) -> Self {
        Self {
            source,
            phase,
            x,
            timestamp_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub timestamp_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Begin(PointerSample),
    Move(PointerSample),
    End(PointerSample),
    Cancel,
}

/// Tracks the one pointer that owns the current gesture.
///
/// The first pointer to start wins; every event from another pointer, and
/// everything after the owner is released, is dropped.
#[derive(Clone, Debug, Default)]
pub struct InputUnifier {
    active: Option<PointerSource>,
}

impl InputUnifier {
    #[inline]
    pub fn active(&self) -> Option<PointerSource> {
        self.active
    }

    pub fn accept(&mut self, raw: RawInput) -> Option<GestureEvent> {
        if !raw.x.is_finite() {
            return None;
        }
        let sample = PointerSample {
            x: raw.x,
            timestamp_ms: raw.timestamp_ms,
        };
        match (raw.phase, self.active) {
            (InputPhase::Start, None) => {
                self.active = Some(raw.source);
                Some(GestureEvent::Begin(sample))
            }
            (InputPhase::Start, Some(_)) => None,
            (InputPhase::Move, Some(owner)) if owner == raw.source => {
                Some(GestureEvent::Move(sample))
            }
            (InputPhase::End, Some(owner)) if owner == raw.source => {
                self.active = None;
                Some(GestureEvent::End(sample))
            }
            (InputPhase::Cancel, Some(owner)) if owner == raw.source => {
                self.active = None;
                Some(GestureEvent::Cancel)
            }
            _ => None,
        }
    }

    /// Forget the owner without producing an event (reset, teardown).
    pub fn release(&mut self) {
        self.active = None;
    }
}
