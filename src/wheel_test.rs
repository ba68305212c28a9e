use super::*;
use crate::angle::Direction;
use crate::spin::{SpinEnd, SpinPolicy};

fn wheel() -> Wheel {
    Wheel::new(&WheelConfig::default())
}

fn spin_steps(gesture: &Gesture) -> f64 {
    match gesture {
        Gesture::Spin(req) => req.step_count,
        Gesture::Ignored(reason) => panic!("expected a spin, got {reason:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn starts_at_zero() {
    let w = wheel();
    assert_eq!(w.angle(), Angle::ZERO);
    assert_eq!(w.number(), 0);
    assert_eq!(w.frame().label, "0");
}

#[tokio::test(start_paused = true)]
async fn drag_in_right_bottom_spins_clockwise() {
    let mut w = wheel();
    assert!(w.on_pointer_down(Point::new(450.0, 450.0)));
    let gesture = w.on_pointer_up(Point::new(440.0, 470.0));

    let Gesture::Spin(req) = &gesture else {
        panic!("expected a spin, got {gesture:?}");
    };
    assert_eq!(req.direction, Direction::Clockwise);

    let outcome = w.animator().wait_idle().await.unwrap();
    assert_eq!(outcome.end, SpinEnd::Completed);
    // sqrt(10^2 + 20^2) = 22.36 -> 23 steps.
    assert_eq!(w.angle().whole_degrees(), 23);
    assert_eq!(w.number(), 3);
}

#[tokio::test(start_paused = true)]
async fn release_in_dead_zone_does_not_spin() {
    let mut w = wheel();
    w.on_pointer_down(Point::new(450.0, 450.0));
    let gesture = w.on_pointer_up(Point::new(350.0, 320.0));

    assert_eq!(gesture, Gesture::Ignored(IgnoreReason::DeadZone));
    assert!(w.animator().wait_idle().await.is_none());
    assert_eq!(w.angle(), Angle::ZERO);
}

#[tokio::test(start_paused = true)]
async fn press_outside_disk_is_not_a_drag() {
    let mut w = wheel();
    assert!(!w.on_pointer_down(Point::new(10.0, 10.0)));
    let gesture = w.on_pointer_up(Point::new(200.0, 550.0));

    assert_eq!(gesture, Gesture::Ignored(IgnoreReason::OutsideDisk));
    assert_eq!(w.angle(), Angle::ZERO);
}

#[tokio::test(start_paused = true)]
async fn click_without_motion_does_not_spin() {
    let mut w = wheel();
    w.on_pointer_down(Point::new(500.0, 300.0));
    let gesture = w.on_pointer_up(Point::new(500.0, 300.0));
    assert_eq!(gesture, Gesture::Ignored(IgnoreReason::NoDisplacement));
}

#[tokio::test(start_paused = true)]
async fn keys_nudge_without_animation() {
    let mut w = wheel();
    assert_eq!(w.on_key_down(&Key::Left), Some(Angle::from_degrees(360)));
    assert_eq!(w.number(), 32);
    assert_eq!(w.on_key_down(&Key::Right), Some(Angle::ZERO));
    assert_eq!(w.on_key_down(&Key::Right), Some(Angle::from_degrees(1)));
    assert_eq!(w.on_key_down(&Key::Other("Enter".into())), None);
    assert_eq!(w.angle().whole_degrees(), 1);
    assert!(!w.animator().is_spinning());
}

#[tokio::test(start_paused = true)]
async fn second_drag_replaces_first() {
    let mut w = wheel();

    w.on_pointer_down(Point::new(450.0, 450.0));
    w.on_pointer_up(Point::new(350.0, 550.0));
    w.on_pointer_down(Point::new(150.0, 150.0));
    let second = w.on_pointer_up(Point::new(150.0, 100.0));

    w.animator().wait_idle().await;
    // First gesture was superseded before stepping; second ran 50 steps counterclockwise.
    assert_eq!(spin_steps(&second), 50.0);
    assert_eq!(w.angle().whole_degrees(), 311);
}

#[tokio::test(start_paused = true)]
async fn queued_drags_run_in_order() {
    let config = WheelConfig { spin_policy: SpinPolicy::Queue, ..WheelConfig::default() };
    let mut w = Wheel::new(&config);

    w.on_pointer_down(Point::new(450.0, 450.0));
    w.on_pointer_up(Point::new(420.0, 490.0));
    w.on_pointer_down(Point::new(150.0, 150.0));
    w.on_pointer_up(Point::new(150.0, 130.0));

    w.animator().wait_idle().await;
    // 50 clockwise then 20 counterclockwise.
    assert_eq!(w.angle().whole_degrees(), 30);
}

#[tokio::test(start_paused = true)]
async fn shared_angle_tracks_wheel() {
    let mut w = wheel();
    let shared = w.shared_angle();
    w.on_key_down(&Key::Right);
    assert_eq!(shared.snapshot().whole_degrees(), 1);
    w.shutdown().await;
}
