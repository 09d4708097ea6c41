#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_pointer_x: f64,
    pub start_virtual_time: f64,
    pub start_timestamp_ms: f64,
    pub last_pointer_x: f64,
}

/// What the flick detector gets when a session closes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub start_pointer_x: f64,
    pub start_timestamp_ms: f64,
    pub release_x: f64,
    pub release_timestamp_ms: f64,
}

impl DragRelease {
    #[inline]
    pub fn displacement_px(&self) -> f64 {
        self.release_x - self.start_pointer_x
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.release_timestamp_ms - self.start_timestamp_ms
    }
}

/// Time offset for a horizontal drag of `dx` pixels.
///
/// Dragging towards positive x moves time backwards, like grabbing the
/// object and pulling it. Returns `None` for a container without width.
#[inline]
pub fn scrub_time_delta(dx: f64, width_px: f64, duration: f64, sensitivity: f64) -> Option<f64> {
    if !(width_px.is_finite() && width_px > 0.0) {
        return None;
    }
    let percent = dx / width_px;
    Some(-percent * duration * sensitivity)
}

#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session. Returns `false` if one is already open.
    pub fn begin(&mut self, x: f64, start_virtual_time: f64, now_ms: f64) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            start_pointer_x: x,
            start_virtual_time,
            start_timestamp_ms: now_ms,
            last_pointer_x: x,
        });
        true
    }

    /// Record a move and compute the unwrapped target time for it.
    pub fn target_for(
        &mut self,
        x: f64,
        width_px: Option<f64>,
        duration: f64,
        sensitivity: f64,
    ) -> Option<f64> {
        let session = self.session.as_mut()?;
        session.last_pointer_x = x;
        let delta = scrub_time_delta(
            x - session.start_pointer_x,
            width_px?,
            duration,
            sensitivity,
        )?;
        Some(session.start_virtual_time + delta)
    }

    pub fn end(&mut self, now_ms: f64) -> Option<DragRelease> {
        let s = self.session.take()?;
        Some(DragRelease {
            start_pointer_x: s.start_pointer_x,
            start_timestamp_ms: s.start_timestamp_ms,
            release_x: s.last_pointer_x,
            release_timestamp_ms: now_ms,
        })
    }

    /// Close without producing a release. Returns whether a session was open.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_a_no_op() {
        assert_eq!(scrub_time_delta(50.0, 0.0, 10.0, 2.0), None);
        assert_eq!(scrub_time_delta(50.0, f64::NAN, 10.0, 2.0), None);
    }

    #[test]
    fn release_uses_last_move() {
        let mut t = DragTracker::default();
        assert!(t.begin(100.0, 1.0, 0.0));
        assert!(!t.begin(5.0, 0.0, 1.0));
        t.target_for(180.0, Some(400.0), 10.0, 2.0);
        let r = t.end(50.0).unwrap();
        assert_eq!(r.displacement_px(), 80.0);
        assert_eq!(r.elapsed_ms(), 50.0);
        assert!(!t.is_active());
    }
}
