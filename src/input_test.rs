use super::*;
use crate::geometry::BoardGeometry;

// --- Key ---

#[test]
fn right_nudges_clockwise() {
    assert_eq!(Key::Right.nudge_direction(), Some(Direction::Clockwise));
}

#[test]
fn left_nudges_counterclockwise() {
    assert_eq!(Key::Left.nudge_direction(), Some(Direction::Counterclockwise));
}

#[test]
fn other_keys_do_not_nudge() {
    assert_eq!(Key::Other("Up".into()).nudge_direction(), None);
    assert_eq!(Key::Other(String::new()).nudge_direction(), None);
}

// --- nudge ---

#[test]
fn nudge_steps_shared_angle_once() {
    let angle = SharedAngle::new();
    assert_eq!(nudge(&Key::Right, &angle), Some(Angle::from_degrees(1)));
    assert_eq!(nudge(&Key::Right, &angle), Some(Angle::from_degrees(2)));
    assert_eq!(angle.snapshot().whole_degrees(), 2);
}

#[test]
fn nudge_left_from_zero_folds() {
    let angle = SharedAngle::new();
    assert_eq!(nudge(&Key::Left, &angle), Some(Angle::from_degrees(360)));
    assert_eq!(nudge(&Key::Right, &angle), Some(Angle::ZERO));
}

#[test]
fn unbound_key_leaves_angle_alone() {
    let angle = SharedAngle::new();
    assert_eq!(nudge(&Key::Other("Space".into()), &angle), None);
    assert_eq!(angle.snapshot(), Angle::ZERO);
}

// --- DragState ---

#[test]
fn default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}

#[test]
fn press_inside_disk_arms() {
    let disk = BoardGeometry::default().disk;
    let mut drag = DragState::default();
    assert!(drag.press(Point::new(450.0, 450.0), &disk));
    assert_eq!(drag, DragState::Armed { start: Point::new(450.0, 450.0) });
}

#[test]
fn press_outside_disk_disarms() {
    let disk = BoardGeometry::default().disk;
    let mut drag = DragState::default();
    drag.press(Point::new(450.0, 450.0), &disk);
    assert!(!drag.press(Point::new(5.0, 5.0), &disk));
    assert_eq!(drag, DragState::Idle);
}

#[test]
fn release_returns_start_and_resets() {
    let disk = BoardGeometry::default().disk;
    let mut drag = DragState::default();
    drag.press(Point::new(120.0, 200.0), &disk);
    assert_eq!(drag.release(), Some(Point::new(120.0, 200.0)));
    assert_eq!(drag, DragState::Idle);
    assert_eq!(drag.release(), None);
}

#[test]
fn release_without_press_is_none() {
    let mut drag = DragState::default();
    assert_eq!(drag.release(), None);
}
