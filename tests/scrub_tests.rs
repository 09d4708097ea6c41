// Host-side tests for drag scrubbing through the controller.

mod common;

use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use turntable_core::*;

#[test]
fn right_to_left_drag_advances_time() {
    let mut c = ready(10.0);
    assert!(c.begin_drag(300.0, 100.0));
    assert!(c.drag_to(100.0));
    // 200 px of a 500 px box at sensitivity 2 over 10 s is +8 s
    assert!((c.virtual_time().target - 8.0).abs() < 1e-9);
}

#[test]
fn drag_target_wraps_past_the_end() {
    let mut c = ready_with(quiet_config(), {
        let mut t = FakeTimeline::with_duration(10.0);
        t.position = 5.0;
        t
    });
    assert_eq!(c.virtual_time().current, 5.0);

    c.begin_drag(300.0, 0.0);
    c.drag_to(100.0);
    assert!((c.virtual_time().target - 3.0).abs() < 1e-9);
}

#[test]
fn left_to_right_drag_wraps_below_zero() {
    let mut c = ready(10.0);
    c.begin_drag(100.0, 0.0);
    c.drag_to(250.0);
    assert!((c.virtual_time().target - 4.0).abs() < 1e-9);
}

#[test]
fn drag_offset_is_measured_from_session_start() {
    let mut c = ready(10.0);
    c.begin_drag(300.0, 0.0);
    c.drag_to(250.0);
    c.drag_to(200.0);
    c.drag_to(100.0);
    assert!((c.virtual_time().target - 8.0).abs() < 1e-9);
    let session = c.drag_session().unwrap();
    assert_eq!(session.start_pointer_x, 300.0);
    assert_eq!(session.last_pointer_x, 100.0);
}

#[test]
fn zero_or_missing_width_is_a_noop() {
    let mut c = ready(10.0);
    c.geometry_mut().0 = Some(0.0);
    assert!(c.begin_drag(300.0, 0.0));
    assert!(!c.drag_to(100.0));
    assert_eq!(c.virtual_time().target, 0.0);

    c.geometry_mut().0 = None;
    assert!(!c.drag_to(100.0));
    assert_eq!(c.virtual_time().target, 0.0);

    c.geometry_mut().0 = Some(WIDTH_PX);
    assert!(c.drag_to(100.0));
    assert!((c.virtual_time().target - 8.0).abs() < 1e-9);
}

#[test]
fn nothing_happens_before_metadata() {
    let mut c: TestController =
        ScrubController::new(quiet_config(), FakeTimeline::loading(), FixedWidth(Some(WIDTH_PX)), 0.0)
            .unwrap();
    c.start();
    c.on_metadata_ready(0.0);
    assert_eq!(c.readiness(), Readiness::Loading);
    assert!(!c.is_ready());

    assert!(!c.begin_drag(300.0, 10.0));
    assert!(!c.drag_to(100.0));
    assert!(c.end_drag(20.0).is_none());
    c.on_play_pause_requested(30.0);
    run_frames(&mut c, 0.0, 500.0);

    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.virtual_time(), VirtualTime::default());
    assert!(c.timeline().seeks.is_empty());
    assert!(!c.timeline().playing);
}

#[test]
fn slow_release_eases_onto_quantized_frames() {
    let mut c = ready(10.0);
    c.begin_drag(300.0, 0.0);
    c.drag_to(100.0);
    assert!(c.end_drag(2000.0).is_none());
    assert_eq!(c.state(), PlaybackState::Idle);

    run_frames(&mut c, 2000.0, 4000.0);

    let vt = c.virtual_time();
    assert!((vt.current - 8.0).abs() <= c.config().epsilon);
    assert!((c.timeline().position - 8.0).abs() < 1e-9);
    for s in &c.timeline().seeks {
        let steps = s / 0.1;
        assert!((steps - steps.round()).abs() < 1e-6, "seek {} off grid", s);
        assert!(in_range(*s, 10.0));
    }
}

#[test]
fn large_drag_eases_in_the_drag_direction() {
    let mut c = ready(10.0);
    c.begin_drag(300.0, 0.0);
    // +8 s, more than half a revolution
    c.drag_to(100.0);

    c.frame(16.0);
    assert!((c.virtual_time().current - 1.44).abs() < 1e-3);
    let first = c.timeline().seeks.first().copied();
    assert!(first.is_some_and(|s| (s - 1.4).abs() < 1e-9), "first seek {:?}", first);

    c.end_drag(2000.0);
    run_frames(&mut c, 2000.0, 4000.0);

    let seeks = &c.timeline().seeks;
    assert!(seeks.iter().all(|s| (0.0..=8.0 + 1e-9).contains(s)));
    assert!(seeks.windows(2).all(|w| w[1] >= w[0]), "seeks {:?}", seeks);
    assert!((c.virtual_time().current - 8.0).abs() <= c.config().epsilon);
}

#[test]
fn large_reverse_drag_eases_backwards() {
    let mut c = ready(10.0);
    c.begin_drag(100.0, 0.0);
    // -8 s
    c.drag_to(300.0);
    c.end_drag(2000.0);
    run_frames(&mut c, 2000.0, 4000.0);

    let seeks = &c.timeline().seeks;
    // 0 -> 2 going backwards through the seam: 9.x down to 2.0
    assert!(seeks.iter().all(|s| *s >= 2.0 - 1e-9));
    assert!(seeks.windows(2).all(|w| w[1] <= w[0]), "seeks {:?}", seeks);
    assert!((c.virtual_time().current - 2.0).abs() <= c.config().epsilon);
}

#[test]
fn small_drag_crosses_the_seam_forward() {
    let mut c = ready_with(quiet_config(), {
        let mut t = FakeTimeline::with_duration(10.0);
        t.position = 9.5;
        t
    });
    c.begin_drag(300.0, 0.0);
    // +1 s, past the seam
    c.drag_to(275.0);
    assert!((c.virtual_time().target - 0.5).abs() < 1e-9);
    c.end_drag(5000.0);
    run_frames(&mut c, 5000.0, 6000.0);

    let seeks = &c.timeline().seeks;
    assert!(!seeks.is_empty());
    assert!(seeks.iter().all(|s| *s >= 9.5 || *s <= 0.5 + 1e-9));
    assert!((c.virtual_time().current - 0.5).abs() <= c.config().epsilon);
}

#[test]
fn drags_chain_across_whole_revolutions() {
    let mut c = ready(10.0);
    // two +8 s drags back to back without letting the first settle
    c.begin_drag(300.0, 0.0);
    c.drag_to(100.0);
    c.end_drag(2000.0);
    c.frame(2000.0);
    c.begin_drag(300.0, 2100.0);
    c.drag_to(100.0);
    c.end_drag(4000.0);
    assert!((c.virtual_time().target - 6.0).abs() < 1e-9);

    run_frames(&mut c, 4000.0, 7000.0);
    let seeks = &c.timeline().seeks;
    // 16 s forward passes the seam exactly once
    let wraps = seeks.windows(2).filter(|w| w[1] < w[0]).count();
    assert_eq!(wraps, 1, "seeks {:?}", seeks);
    assert!((c.virtual_time().current - 6.0).abs() <= c.config().epsilon);
}

#[test]
fn touch_input_drives_a_drag() {
    let mut c = ready(10.0);
    let touch = PointerSource::Touch(3);
    let other = PointerSource::Touch(4);

    c.handle_input(RawInput::new(touch, InputPhase::Start, 300.0, 0.0));
    assert!(c.is_dragging());
    // a second finger neither restarts nor steers the drag
    assert!(c.handle_input(RawInput::new(other, InputPhase::Start, 10.0, 5.0)).is_none());
    assert!(c.handle_input(RawInput::new(other, InputPhase::Move, 10.0, 6.0)).is_none());

    c.handle_input(RawInput::new(touch, InputPhase::Move, 100.0, 500.0));
    assert!((c.virtual_time().target - 8.0).abs() < 1e-9);
    c.handle_input(RawInput::new(touch, InputPhase::End, 100.0, 2000.0));
    assert!(!c.is_dragging());
    assert_eq!(c.state(), PlaybackState::Idle);
}

#[test]
fn cancelled_gesture_keeps_target_without_flick() {
    let mut c = ready(10.0);
    let mouse = PointerSource::Mouse;
    c.handle_input(RawInput::new(mouse, InputPhase::Start, 300.0, 0.0));
    c.handle_input(RawInput::new(mouse, InputPhase::Move, 100.0, 10.0));
    c.handle_input(RawInput::new(mouse, InputPhase::Cancel, 100.0, 20.0));
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(!c.timeline().playing);
    assert!((c.virtual_time().target - 8.0).abs() < 1e-9);
}

#[test]
fn virtual_time_stays_wrapped_under_random_gestures() {
    let d = 7.3;
    let mut c = ready(d);
    let mut rng = StdRng::seed_from_u64(0x7075_726e);
    let mut now = 0.0;

    for _ in 0..400 {
        now += rng.gen_range(1.0..40.0);
        match rng.gen_range(0..5) {
            0 => {
                c.begin_drag(rng.gen_range(-500.0..1500.0), now);
            }
            1 | 2 => {
                c.drag_to(rng.gen_range(-5000.0..5000.0));
            }
            3 => {
                c.end_drag(now);
            }
            _ => {
                c.frame(now);
            }
        }
        let vt = c.virtual_time();
        assert!(in_range(vt.current, d), "current {} escaped", vt.current);
        assert!(in_range(vt.target, d), "target {} escaped", vt.target);
    }
    assert!(c.timeline().seeks.iter().all(|s| in_range(*s, d)));
}
