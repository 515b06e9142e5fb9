// SimHire - core/range.rs
//
// Two-handle range selector interaction state.
//
// States: Idle -> Dragging(Min | Max) -> Idle, driven by press/release.
// Pointer positions arrive as a fraction of the track width and are mapped
// onto the salary domain of the range being edited.

use crate::core::filter::SalaryRange;

/// Which handle of the range track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

/// Current pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

/// Pointer-capture state machine for a two-handle range track.
///
/// Holds no value of its own: every drag writes straight into the
/// `SalaryRange` passed in, so the range stays the only source of truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSelector {
    drag: DragState,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.drag
    }

    pub fn active_handle(&self) -> Option<Handle> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(handle) => Some(handle),
        }
    }

    /// Capture `handle`. Only one handle may be captured at a time, so a press
    /// while already dragging is ignored. Returns true if capture started.
    pub fn press(&mut self, handle: Handle) -> bool {
        match self.drag {
            DragState::Idle => {
                self.drag = DragState::Dragging(handle);
                tracing::trace!(?handle, "Range handle captured");
                true
            }
            DragState::Dragging(_) => false,
        }
    }

    /// Move the captured handle to `fraction` of the track.
    ///
    /// Does nothing while idle. Returns true if the range changed.
    pub fn drag_to(&self, fraction: f32, range: &mut SalaryRange) -> bool {
        let Some(handle) = self.active_handle() else {
            return false;
        };
        let value = value_at(fraction, range.domain_max());
        match handle {
            Handle::Min => range.set_min(value),
            Handle::Max => range.set_max(value),
        }
    }

    /// End capture. Also used when the pointer leaves the track.
    pub fn release(&mut self) {
        if self.drag != DragState::Idle {
            tracing::trace!("Range handle released");
        }
        self.drag = DragState::Idle;
    }
}

/// Map a track fraction onto `[0, domain_max]`, rounding to the nearest unit.
///
/// Fractions outside `[0, 1]` are clamped; NaN is treated as 0.
pub fn value_at(fraction: f32, domain_max: u32) -> u32 {
    let f = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (f64::from(f) * f64::from(domain_max)).round() as u32
}

/// Inverse of [`value_at`]: where `value` sits on the track, in `[0, 1]`.
pub fn fraction_of(value: u32, domain_max: u32) -> f32 {
    if domain_max == 0 {
        return 0.0;
    }
    (f64::from(value.min(domain_max)) / f64::from(domain_max)) as f32
}

/// Pick the handle a press at `fraction` should capture: whichever is nearer.
/// On a tie (collapsed range) a press above the pair takes `Max`, anything
/// else takes `Min`, so the range can always be widened toward the press.
pub fn nearest_handle(fraction: f32, range: &SalaryRange) -> Handle {
    let value = value_at(fraction, range.domain_max());
    let to_min = value.abs_diff(range.min());
    let to_max = value.abs_diff(range.max());
    if to_min < to_max {
        Handle::Min
    } else if to_max < to_min {
        Handle::Max
    } else if value > range.max() {
        Handle::Max
    } else {
        Handle::Min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_handle_at_half_track() {
        let mut range = SalaryRange::new(60, 140, 200);
        let mut selector = RangeSelector::new();
        assert!(selector.press(Handle::Min));
        assert!(selector.drag_to(0.5, &mut range));
        assert_eq!(range.min(), 100);
        assert_eq!(range.max(), 140);
    }

    #[test]
    fn test_min_handle_stops_at_max() {
        let mut range = SalaryRange::new(60, 80, 200);
        let mut selector = RangeSelector::new();
        selector.press(Handle::Min);
        selector.drag_to(0.5, &mut range);
        assert_eq!((range.min(), range.max()), (80, 80));
    }

    #[test]
    fn test_max_handle_stops_at_min() {
        let mut range = SalaryRange::new(120, 140, 200);
        let mut selector = RangeSelector::new();
        selector.press(Handle::Max);
        selector.drag_to(0.1, &mut range);
        assert_eq!((range.min(), range.max()), (120, 120));
    }

    #[test]
    fn test_idle_drag_is_noop() {
        let mut range = SalaryRange::full(200);
        let selector = RangeSelector::new();
        assert!(!selector.drag_to(0.3, &mut range));
        assert!(range.is_full());
    }

    #[test]
    fn test_single_capture_until_release() {
        let mut selector = RangeSelector::new();
        assert!(selector.press(Handle::Min));
        assert!(!selector.press(Handle::Max));
        assert_eq!(selector.state(), DragState::Dragging(Handle::Min));
        selector.release();
        assert_eq!(selector.state(), DragState::Idle);
        assert!(selector.press(Handle::Max));
    }

    #[test]
    fn test_release_every_idle_frame_is_harmless() {
        let mut range = SalaryRange::new(60, 140, 200);
        let mut selector = RangeSelector::new();
        // The track releases on each frame with no pointer button down.
        selector.release();
        selector.release();
        assert_eq!(selector.state(), DragState::Idle);
        assert!(selector.press(Handle::Max));
        assert!(selector.drag_to(0.9, &mut range));
        selector.release();
        selector.release();
        assert!(!selector.drag_to(0.1, &mut range));
        assert_eq!((range.min(), range.max()), (60, 180));
    }

    #[test]
    fn test_fraction_clamping_and_rounding() {
        assert_eq!(value_at(-0.4, 200), 0);
        assert_eq!(value_at(1.7, 200), 200);
        assert_eq!(value_at(f32::NAN, 200), 0);
        assert_eq!(value_at(0.333, 200), 67);
        assert_eq!(fraction_of(100, 200), 0.5);
        assert_eq!(fraction_of(5, 0), 0.0);
    }

    #[test]
    fn test_invariant_holds_over_event_sequence() {
        let mut range = SalaryRange::new(60, 140, 200);
        let mut selector = RangeSelector::new();
        let events: Vec<(Handle, Vec<f32>)> = vec![
            (Handle::Min, vec![0.9, 1.0, 0.2, 0.95]),
            (Handle::Max, vec![0.0, 0.5, 0.05, 1.2]),
            (Handle::Min, vec![-1.0, 0.75, 2.0]),
            (Handle::Max, vec![0.3, f32::NAN]),
        ];
        for (handle, fractions) in events {
            selector.press(handle);
            for f in fractions {
                selector.drag_to(f, &mut range);
                assert!(range.min() <= range.max(), "{range:?}");
                assert!(range.max() <= range.domain_max());
            }
            selector.release();
        }
    }

    #[test]
    fn test_nearest_handle() {
        let range = SalaryRange::new(60, 140, 200);
        assert_eq!(nearest_handle(0.1, &range), Handle::Min);
        assert_eq!(nearest_handle(0.9, &range), Handle::Max);
        let collapsed = SalaryRange::new(200, 200, 200);
        assert_eq!(nearest_handle(0.2, &collapsed), Handle::Min);
        let bottom = SalaryRange::new(0, 0, 200);
        assert_eq!(nearest_handle(0.8, &bottom), Handle::Max);
    }
}
