use proptest::prelude::*;
use zhizhu3d_core::{FurniturePreset, Point, Rect};
use zhizhu3d_designer::{Canvas, FurnitureId, PointerEvent, ResizeHandle, ShapeId};

fn bed() -> FurniturePreset {
    FurniturePreset::new("床", 200.0, 150.0)
}

#[test]
fn test_draw_room_with_pointer() {
    let mut canvas = Canvas::new();
    canvas.handle_pointer(PointerEvent::Down(Point::new(300.0, 200.0)));
    assert!(canvas.is_drawing());
    canvas.handle_pointer(PointerEvent::Move(Point::new(100.0, 50.0)));
    canvas.handle_pointer(PointerEvent::Up);

    assert!(!canvas.is_drawing());
    assert_eq!(canvas.room(), Some(Rect::new(100.0, 50.0, 200.0, 150.0)));
}

#[test]
fn test_live_preview_updates() {
    let mut canvas = Canvas::new();
    assert!(canvas.begin_room_draw(Point::new(10.0, 10.0)));
    assert_eq!(
        canvas.update_room_draw(Point::new(20.0, 30.0)),
        Some(Rect::new(10.0, 10.0, 10.0, 20.0))
    );
    assert_eq!(
        canvas.update_room_draw(Point::new(50.0, 40.0)),
        Some(Rect::new(10.0, 10.0, 40.0, 30.0))
    );
    assert_eq!(canvas.end_room_draw(), Some(Rect::new(10.0, 10.0, 40.0, 30.0)));
}

#[test]
fn test_second_room_is_ignored() {
    let mut canvas = Canvas::new();
    canvas.begin_room_draw(Point::new(0.0, 0.0));
    canvas.update_room_draw(Point::new(100.0, 80.0));
    canvas.end_room_draw();

    assert!(!canvas.begin_room_draw(Point::new(200.0, 200.0)));
    assert!(canvas.update_room_draw(Point::new(300.0, 300.0)).is_none());
    assert_eq!(canvas.room(), Some(Rect::new(0.0, 0.0, 100.0, 80.0)));
}

#[test]
fn test_pointer_leave_ends_drawing() {
    let mut canvas = Canvas::new();
    canvas.handle_pointer(PointerEvent::Down(Point::new(0.0, 0.0)));
    canvas.handle_pointer(PointerEvent::Move(Point::new(40.0, 40.0)));
    canvas.handle_pointer(PointerEvent::Leave);
    assert!(!canvas.is_drawing());
    assert!(canvas.room().is_some());
}

#[test]
fn test_drawing_without_move_leaves_no_room() {
    let mut canvas = Canvas::new();
    canvas.begin_room_draw(Point::new(5.0, 5.0));
    assert_eq!(canvas.end_room_draw(), None);
    assert!(canvas.room().is_none());
}

#[test]
fn test_draw_outside_canvas_is_ignored() {
    let mut canvas = Canvas::with_size(100.0, 100.0);
    assert!(!canvas.begin_room_draw(Point::new(150.0, 10.0)));
    assert!(!canvas.is_drawing());
}

#[test]
fn test_pointer_clamped_while_drawing() {
    let mut canvas = Canvas::with_size(100.0, 100.0);
    canvas.begin_room_draw(Point::new(50.0, 50.0));
    let room = canvas.update_room_draw(Point::new(500.0, -20.0));
    assert_eq!(room, Some(Rect::new(50.0, 0.0, 50.0, 50.0)));
}

#[test]
fn test_clear_room_allows_redraw() {
    let mut canvas = Canvas::new();
    canvas.begin_room_draw(Point::new(0.0, 0.0));
    canvas.update_room_draw(Point::new(10.0, 10.0));
    canvas.end_room_draw();

    assert_eq!(canvas.clear_room(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(canvas.begin_room_draw(Point::new(1.0, 1.0)));
}

#[test]
fn test_add_furniture_at_default_position() {
    let mut canvas = Canvas::new();
    let a = canvas.add_furniture(&bed());
    let b = canvas.add_furniture(&bed());

    assert_ne!(a, b);
    assert_eq!(canvas.furniture().len(), 2);
    for f in canvas.furniture() {
        assert_eq!(f.rect, Rect::new(20.0, 20.0, 200.0, 150.0));
        assert_eq!(f.name, "床");
    }
}

#[test]
fn test_move_and_resize_furniture() {
    let mut canvas = Canvas::new();
    let id: ShapeId = canvas.add_furniture(&bed()).into();

    assert_eq!(
        canvas.move_shape(id, 100.0, 120.0),
        Some(Rect::new(20.0, 20.0, 200.0, 150.0))
    );
    assert_eq!(canvas.scene().rect(id), Some(Rect::new(100.0, 120.0, 200.0, 150.0)));

    canvas.resize_shape(id, 180.0, 90.0, 110.0, 130.0);
    assert_eq!(canvas.scene().rect(id), Some(Rect::new(110.0, 130.0, 180.0, 90.0)));
}

#[test]
fn test_move_is_bounded_by_canvas() {
    let mut canvas = Canvas::with_size(400.0, 300.0);
    let id: ShapeId = canvas.add_furniture(&bed()).into();

    canvas.move_shape(id, 1000.0, -50.0);
    assert_eq!(canvas.scene().rect(id), Some(Rect::new(200.0, 0.0, 200.0, 150.0)));
}

#[test]
fn test_resize_is_bounded_by_canvas() {
    let mut canvas = Canvas::with_size(400.0, 300.0);
    let id: ShapeId = canvas.add_furniture(&bed()).into();

    canvas.resize_shape(id, 500.0, 100.0, 100.0, 50.0);
    assert_eq!(canvas.scene().rect(id), Some(Rect::new(100.0, 50.0, 300.0, 100.0)));
}

#[test]
fn test_resize_by_handle() {
    let mut canvas = Canvas::new();
    let id: ShapeId = canvas.add_furniture(&bed()).into();

    canvas.resize_by_handle(id, ResizeHandle::BottomRight, 30.0, -50.0);
    assert_eq!(canvas.scene().rect(id), Some(Rect::new(20.0, 20.0, 230.0, 100.0)));
}

#[test]
fn test_room_move_and_missing_room() {
    let mut canvas = Canvas::new();
    assert!(canvas.move_shape(ShapeId::Room, 10.0, 10.0).is_none());
    assert!(canvas
        .resize_shape(ShapeId::Room, 10.0, 10.0, 0.0, 0.0)
        .is_none());
    assert!(canvas.room().is_none());

    canvas.begin_room_draw(Point::new(0.0, 0.0));
    canvas.update_room_draw(Point::new(100.0, 80.0));
    canvas.end_room_draw();
    canvas.move_shape(ShapeId::Room, 50.0, 40.0);
    assert_eq!(canvas.room(), Some(Rect::new(50.0, 40.0, 100.0, 80.0)));
}

#[test]
fn test_delete_unknown_furniture_is_noop() {
    let mut canvas = Canvas::new();
    canvas.add_furniture(&bed());
    let before = canvas.furniture().to_vec();

    assert!(canvas.delete_shape(ShapeId::Furniture(FurnitureId(999))).is_none());
    assert_eq!(canvas.furniture(), before.as_slice());
}

#[test]
fn test_delete_room_keeps_furniture() {
    let mut canvas = Canvas::new();
    canvas.begin_room_draw(Point::new(0.0, 0.0));
    canvas.update_room_draw(Point::new(100.0, 80.0));
    canvas.end_room_draw();
    canvas.add_furniture(&bed());

    assert!(canvas.delete_shape(ShapeId::Room).is_some());
    assert!(canvas.room().is_none());
    assert_eq!(canvas.furniture().len(), 1);
}

proptest! {
    #[test]
    fn prop_drawn_room_spans_both_pointers(
        x1 in 0.0f64..800.0,
        y1 in 0.0f64..600.0,
        x2 in 0.0f64..800.0,
        y2 in 0.0f64..600.0,
    ) {
        let mut canvas = Canvas::new();
        canvas.handle_pointer(PointerEvent::Down(Point::new(x1, y1)));
        canvas.handle_pointer(PointerEvent::Move(Point::new(x2, y2)));
        canvas.handle_pointer(PointerEvent::Up);

        let room = canvas.room().unwrap();
        prop_assert_eq!(room.x, x1.min(x2));
        prop_assert_eq!(room.y, y1.min(y2));
        prop_assert_eq!(room.width, (x1 - x2).abs());
        prop_assert_eq!(room.height, (y1 - y2).abs());
    }
}
