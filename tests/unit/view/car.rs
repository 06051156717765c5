use super::*;
use crate::view::display::FixedDisplay;

const FRAME: Duration = Duration::from_millis(16);

fn view_at(x: f64, y: f64) -> CarView {
    // 200x400 display with offset 300 puts the car at (100, 100).
    let cfg = CarConfig::default();
    let mut view = CarView::new(cfg, &FixedDisplay(Canvas::new(200, 400).unwrap())).unwrap();
    assert_eq!(view.position(), Point::new(100.0, 100.0));
    view.position = Point::new(x, y);
    view
}

fn run_to_idle(view: &mut CarView) -> Vec<Transition> {
    let mut transitions = Vec::new();
    for _ in 0..10_000 {
        transitions.extend(view.tick(FRAME).transitions);
        if !view.is_moving() {
            break;
        }
    }
    transitions
}

#[test]
fn start_position_is_centred_above_the_bottom() {
    let view = CarView::new(
        CarConfig::default(),
        &FixedDisplay(Canvas::new(1081, 1920).unwrap()),
    )
    .unwrap();
    assert_eq!(view.position(), Point::new(540.0, 1620.0));
    assert_eq!(view.heading(), 0.0);
    assert_eq!(view.state(), DriveState::Idle);
    assert!(view.path().is_none());
}

#[test]
fn invalid_config_fails_construction() {
    let cfg = CarConfig {
        move_duration_ms: 0,
        ..CarConfig::default()
    };
    assert!(CarView::new(cfg, &Canvas::new(10, 10).unwrap()).is_err());
}

#[test]
fn tap_does_not_touch_heading_or_position_until_tick() {
    let mut view = view_at(100.0, 100.0);
    assert!(view.on_pointer(&PointerEvent::down(200.0, 100.0)));
    assert_eq!(view.state(), DriveState::Rotating);
    assert_eq!(view.heading(), 0.0);
    assert_eq!(view.position(), Point::new(100.0, 100.0));

    let plan = view.rotation_plan().unwrap();
    assert_eq!(plan.target, 90.0);
    assert_eq!(plan.animate_to, 90.0);
    assert_eq!(view.path().unwrap().start(), Point::new(100.0, 100.0));
}

#[test]
fn full_drive_visits_each_state_once_and_lands_on_the_tap() {
    let mut view = view_at(100.0, 100.0);
    assert!(view.on_pointer(&PointerEvent::down(200.0, 100.0)));

    let transitions = run_to_idle(&mut view);
    assert_eq!(
        transitions,
        vec![
            Transition {
                from: DriveState::Rotating,
                to: DriveState::Translating
            },
            Transition {
                from: DriveState::Translating,
                to: DriveState::Idle
            },
        ]
    );
    assert_eq!(view.heading(), 90.0);
    assert_eq!(view.position(), Point::new(200.0, 100.0));
    assert!(view.rotation_plan().is_none());
    // The path survives for the debug stroke.
    assert_eq!(view.path().unwrap().end(), Point::new(200.0, 100.0));
}

#[test]
fn rotation_completes_before_any_movement() {
    let mut view = view_at(100.0, 100.0);
    view.on_pointer(&PointerEvent::down(100.0, 0.0));
    let start = view.position();

    let mut elapsed = Duration::ZERO;
    while view.state() == DriveState::Rotating {
        view.tick(FRAME);
        elapsed += FRAME;
        if view.state() == DriveState::Rotating {
            assert_eq!(view.position(), start);
        }
    }
    assert!(elapsed >= Duration::from_millis(1000));
}

#[test]
fn heading_sweeps_the_short_way_and_snaps_to_raw_target() {
    let mut view = view_at(100.0, 100.0);
    view.heading = 170.0;
    // Bearing from (100,100) that yields a raw target of -170.
    let a = (-170.0f64 + 90.0).to_radians();
    let to = Point::new(100.0 - 50.0 * a.cos(), 100.0 - 50.0 * a.sin());
    view.on_pointer(&PointerEvent::down(to.x, to.y));

    let plan = view.rotation_plan().unwrap();
    assert!((plan.target + 170.0).abs() < 1e-9);
    assert!((plan.animate_to - 190.0).abs() < 1e-9);

    let mut seen = Vec::new();
    while view.state() == DriveState::Rotating {
        view.tick(FRAME);
        if view.state() == DriveState::Rotating {
            seen.push(view.heading());
        }
    }
    assert!(seen.iter().all(|h| (170.0..=190.0).contains(h)), "{seen:?}");
    assert!((view.heading() + 170.0).abs() < 1e-9);
}

#[test]
fn taps_while_moving_are_ignored() {
    let mut view = view_at(100.0, 100.0);
    assert!(view.on_pointer(&PointerEvent::down(300.0, 300.0)));
    view.tick(Duration::from_millis(500));

    let heading = view.heading();
    let position = view.position();
    let plan = view.rotation_plan();
    assert!(!view.on_pointer(&PointerEvent::down(0.0, 0.0)));
    assert_eq!(view.heading(), heading);
    assert_eq!(view.position(), position);
    assert_eq!(view.rotation_plan(), plan);

    view.tick(Duration::from_millis(1000));
    assert_eq!(view.state(), DriveState::Translating);
    assert!(!view.on_pointer(&PointerEvent::down(0.0, 0.0)));

    run_to_idle(&mut view);
    assert_eq!(view.position(), Point::new(300.0, 300.0));
}

#[test]
fn move_and_up_events_are_not_consumed() {
    let mut view = view_at(100.0, 100.0);
    assert!(!view.on_pointer(&PointerEvent::moved(10.0, 10.0)));
    assert!(!view.on_pointer(&PointerEvent::up(10.0, 10.0)));
    assert_eq!(view.state(), DriveState::Idle);
}

#[test]
fn tap_on_the_car_is_a_consumed_no_op() {
    let mut view = view_at(100.0, 100.0);
    assert!(view.on_pointer(&PointerEvent::down(100.0, 100.0)));
    assert_eq!(view.state(), DriveState::Idle);
    assert!(view.rotation_plan().is_none());
    assert_eq!(view.tick(FRAME), TickReport::default());
    assert_eq!(view.heading(), 0.0);
}

#[test]
fn idle_tick_requests_no_redraw() {
    let mut view = view_at(100.0, 100.0);
    let report = view.tick(FRAME);
    assert!(!report.redraw);
    assert!(report.transitions.is_empty());
}

#[test]
fn motion_is_constant_velocity_along_the_segment() {
    let mut view = view_at(0.0, 0.0);
    view.on_pointer(&PointerEvent::down(0.0, 2000.0));
    view.tick(Duration::from_millis(1000));
    assert_eq!(view.state(), DriveState::Translating);

    view.tick(Duration::from_millis(500));
    assert!((view.position().y - 500.0).abs() < 1e-6);
    assert!(view.position().x.abs() < 1e-9);
    view.tick(Duration::from_millis(500));
    assert!((view.position().y - 1000.0).abs() < 1e-6);
}

#[test]
fn consecutive_taps_chain_headings() {
    let mut view = view_at(100.0, 100.0);
    for (x, y) in [(200.0, 100.0), (200.0, 300.0), (50.0, 50.0), (400.0, 10.0)] {
        assert!(view.on_pointer(&PointerEvent::down(x, y)));
        let plan = view.rotation_plan().unwrap();
        assert_eq!(plan.start, view.heading());
        assert!((-180.0..=180.0).contains(&plan.sweep()));
        run_to_idle(&mut view);
        assert_eq!(view.heading(), plan.target);
        assert_eq!(view.position(), Point::new(x, y));
    }
}
