use eframe_sketch::{GestureController, Stage, Tool};
use egui::{Pos2, Rect, pos2, vec2};

fn canvas() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(600.0, 600.0))
}

#[test]
fn rectangle_gesture_tracks_pointer_from_anchor() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Rectangle);

    gesture.pointer_down(Some(pos2(10.0, 10.0)), &mut stage);
    gesture.pointer_move(pos2(50.0, 80.0), canvas(), &mut stage);
    gesture.pointer_up();

    assert_eq!(stage.rects().len(), 1);
    let rect = &stage.rects()[0];
    assert_eq!(rect.origin, pos2(10.0, 10.0));
    assert_eq!(rect.width, 40.0);
    assert_eq!(rect.height, 70.0);
    assert!(!gesture.is_drawing());
}

#[test]
fn rectangle_gesture_allows_negative_growth() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Rectangle);

    gesture.pointer_down(Some(pos2(100.0, 100.0)), &mut stage);
    gesture.pointer_move(pos2(40.0, 70.0), canvas(), &mut stage);
    gesture.pointer_up();

    let rect = &stage.rects()[0];
    assert_eq!(rect.width, -60.0);
    assert_eq!(rect.height, -30.0);
}

#[test]
fn circle_radius_is_euclidean_distance_from_anchor() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Circle);

    gesture.pointer_down(Some(pos2(100.0, 100.0)), &mut stage);
    gesture.pointer_move(pos2(103.0, 104.0), canvas(), &mut stage);
    gesture.pointer_up();

    assert_eq!(stage.circles().len(), 1);
    let circle = &stage.circles()[0];
    assert_eq!(circle.center, pos2(100.0, 100.0));
    assert_eq!(circle.radius, 5.0);
}

#[test]
fn pencil_appends_exactly_one_point_per_move() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Pencil);

    gesture.pointer_down(Some(pos2(0.0, 0.0)), &mut stage);
    let moves = [pos2(1.0, 1.0), pos2(2.0, 3.0), pos2(4.0, 6.0)];
    for pos in moves {
        gesture.pointer_move(pos, canvas(), &mut stage);
    }
    gesture.pointer_up();

    let line = &stage.lines()[0];
    assert_eq!(line.points.len(), moves.len() + 1);
    // Strictly append-only: the prefix is the earlier sequence, in order.
    assert_eq!(line.points[0], pos2(0.0, 0.0));
    assert_eq!(&line.points[1..], &moves);
}

#[test]
fn only_the_in_progress_shape_is_mutated() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Rectangle);

    gesture.pointer_down(Some(pos2(10.0, 10.0)), &mut stage);
    gesture.pointer_move(pos2(20.0, 20.0), canvas(), &mut stage);
    gesture.pointer_up();
    let first = stage.rects()[0].clone();

    gesture.pointer_down(Some(pos2(200.0, 200.0)), &mut stage);
    gesture.pointer_move(pos2(300.0, 250.0), canvas(), &mut stage);
    gesture.pointer_up();

    assert_eq!(stage.rects().len(), 2);
    assert_eq!(stage.rects()[0], first);
    assert_eq!(stage.rects()[1].width, 100.0);
}

#[test]
fn zero_move_gesture_leaves_degenerate_shapes() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();

    stage.set_tool(Tool::Rectangle);
    gesture.pointer_down(Some(pos2(5.0, 5.0)), &mut stage);
    gesture.pointer_up();

    stage.set_tool(Tool::Circle);
    gesture.pointer_down(Some(pos2(5.0, 5.0)), &mut stage);
    gesture.pointer_up();

    stage.set_tool(Tool::Pencil);
    gesture.pointer_down(Some(pos2(5.0, 5.0)), &mut stage);
    gesture.pointer_up();

    assert_eq!(stage.rects()[0].width, 1.0);
    assert_eq!(stage.rects()[0].height, 1.0);
    assert_eq!(stage.circles()[0].radius, 1.0);
    assert_eq!(stage.lines()[0].points.len(), 1);
}

#[test]
fn moving_outside_the_canvas_ends_the_gesture() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Rectangle);

    gesture.pointer_down(Some(pos2(10.0, 10.0)), &mut stage);
    gesture.pointer_move(pos2(50.0, 50.0), canvas(), &mut stage);
    // Beyond the right edge: gesture ends without an explicit pointer-up.
    gesture.pointer_move(pos2(650.0, 50.0), canvas(), &mut stage);
    assert!(!gesture.is_drawing());

    // Later in-bounds moves must not touch the shape anymore.
    gesture.pointer_move(pos2(400.0, 400.0), canvas(), &mut stage);
    let rect = &stage.rects()[0];
    assert_eq!(rect.width, 40.0);
    assert_eq!(rect.height, 40.0);
}

#[test]
fn pointer_down_in_select_mode_is_a_noop() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    assert_eq!(stage.tool(), Tool::Select);

    gesture.pointer_down(Some(pos2(10.0, 10.0)), &mut stage);
    assert!(!gesture.is_drawing());
    assert!(stage.is_empty());
}

#[test]
fn missing_pointer_position_defaults_to_origin() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Circle);

    gesture.pointer_down(None, &mut stage);
    assert_eq!(stage.circles()[0].center, Pos2::ZERO);
}

#[test]
fn new_pointer_down_supersedes_a_stale_gesture() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Rectangle);

    // First gesture never sees a pointer-up.
    gesture.pointer_down(Some(pos2(10.0, 10.0)), &mut stage);
    gesture.pointer_down(Some(pos2(100.0, 100.0)), &mut stage);
    gesture.pointer_move(pos2(150.0, 120.0), canvas(), &mut stage);
    gesture.pointer_up();

    assert_eq!(stage.rects().len(), 2);
    // The stale shape keeps its degenerate size; only the new one grew.
    assert_eq!(stage.rects()[0].width, 1.0);
    assert_eq!(stage.rects()[1].width, 50.0);
}

#[test]
fn cancel_ends_the_gesture_in_place() {
    let mut stage = Stage::new();
    let mut gesture = GestureController::new();
    stage.set_tool(Tool::Pencil);

    gesture.pointer_down(Some(pos2(0.0, 0.0)), &mut stage);
    gesture.pointer_move(pos2(5.0, 5.0), canvas(), &mut stage);
    gesture.cancel();

    assert!(!gesture.is_drawing());
    gesture.pointer_move(pos2(9.0, 9.0), canvas(), &mut stage);
    assert_eq!(stage.lines()[0].points.len(), 2);
}
