use crate::drag::DragRelease;

/// Direction of travel along the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    Forward,
    Reverse,
}

impl SpinDirection {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Forward => 1.0,
            SpinDirection::Reverse => -1.0,
        }
    }

    /// Same convention as scrubbing: positive screen-x runs time backwards.
    #[inline]
    pub fn from_displacement(displacement_px: f64) -> Self {
        if displacement_px > 0.0 {
            SpinDirection::Reverse
        } else {
            SpinDirection::Forward
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flick {
    pub velocity_px_per_ms: f64,
    pub direction: SpinDirection,
}

/// Release speed in px/ms from true start/end displacement.
#[inline]
pub fn release_velocity(release: &DragRelease) -> f64 {
    release.displacement_px().abs() / release.elapsed_ms().max(1.0)
}

pub fn detect_flick(release: &DragRelease, threshold_px_per_ms: f64) -> Option<Flick> {
    let velocity = release_velocity(release);
    (velocity > threshold_px_per_ms).then(|| Flick {
        velocity_px_per_ms: velocity,
        direction: SpinDirection::from_displacement(release.displacement_px()),
    })
}
