mod common;

use common::three_axes;
use pcp_chart::typing::infer;
use pcp_chart::{AxisLayout, DragState};

fn layout() -> AxisLayout {
    let (_, dims) = infer(three_axes());
    AxisLayout::new(&dims, 1000.0)
}

#[test]
fn test_initial_layout() {
    let layout = layout();
    assert_eq!(layout.order(), vec!["MPG", "Origin", "Weight"]);
    assert_eq!(layout.position("MPG"), Some(0.0));
    assert_eq!(layout.position("Origin"), Some(500.0));
    assert_eq!(layout.position("Weight"), Some(1000.0));
    assert_eq!(layout.drag_state(), &DragState::Idle);
}

#[test]
fn test_drag_reorders_axes() {
    let mut layout = layout();

    assert!(layout.drag_start("Origin"));
    assert_eq!(layout.dragging(), Some("Origin"));
    assert_eq!(layout.drag_state(), &DragState::Dragging(1));

    // Still right of MPG at 0.
    assert!(layout.drag_move("Origin", 50.0));
    assert_eq!(layout.order(), vec!["MPG", "Origin", "Weight"]);
    assert_eq!(layout.position("Origin"), Some(50.0));
    assert!(layout.drag_end("Origin"));

    assert!(layout.drag_start("MPG"));
    assert!(layout.drag_move("MPG", 600.0));
    assert_eq!(layout.order(), vec!["Origin", "MPG", "Weight"]);
    assert_eq!(layout.position("MPG"), Some(600.0));

    assert!(layout.drag_end("MPG"));
    assert_eq!(layout.dragging(), None);
    assert_eq!(layout.order(), vec!["Origin", "MPG", "Weight"]);
}

#[test]
fn test_drag_is_clamped() {
    let mut layout = layout();

    layout.drag_move("Weight", -40.0);
    assert_eq!(layout.position("Weight"), Some(0.0));
    // Tie with MPG keeps the previous relative order.
    assert_eq!(layout.order(), vec!["MPG", "Weight", "Origin"]);

    layout.drag_move("MPG", 5000.0);
    assert_eq!(layout.position("MPG"), Some(1000.0));
    assert_eq!(layout.order(), vec!["Weight", "Origin", "MPG"]);
}

#[test]
fn test_unknown_dimension_is_noop() {
    let mut layout = layout();

    assert!(!layout.drag_start("Horsepower"));
    assert!(!layout.drag_move("Horsepower", 10.0));
    assert!(!layout.drag_end("Horsepower"));
    assert_eq!(layout.order(), vec!["MPG", "Origin", "Weight"]);
    assert_eq!(layout.drag_state(), &DragState::Idle);
}

#[test]
fn test_move_without_start_is_applied() {
    let mut layout = layout();
    assert!(layout.drag_move("Weight", 250.0));
    assert_eq!(layout.order(), vec!["MPG", "Weight", "Origin"]);
    assert_eq!(layout.dragging(), None);
}

#[test]
fn test_single_axis_layout() {
    let (_, dims) = infer(common::table(&["only"], &[&["1"], &["2"]]));
    let mut layout = AxisLayout::new(&dims, 1000.0);
    assert_eq!(layout.position("only"), Some(0.0));
    layout.drag_move("only", 700.0);
    assert_eq!(layout.position("only"), Some(700.0));
    assert_eq!(layout.order(), vec!["only"]);
}
