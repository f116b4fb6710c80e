use zhizhu3d_core::{Catalog, FurniturePreset, Point, Rect, SceneError};
use zhizhu3d_designer::{DesignerState, PointerEvent, ShapeId};

fn bedroom() -> DesignerState {
    let mut state = DesignerState::new();
    state.draw_room(Point::new(0.0, 0.0), Point::new(100.0, 80.0));
    state
}

#[test]
fn test_defaults_come_from_catalog() {
    let state = DesignerState::new();
    assert_eq!(state.room_type, "客厅");
    assert_eq!(state.lighting_style, "无主灯");
    assert_eq!(state.scale, 10.0);
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}

#[test]
fn test_build_payload_example() {
    let mut state = bedroom();
    state.set_room_type("卧室").unwrap();
    state.add_furniture("床").unwrap();

    let payload = state.build_payload().unwrap();
    assert_eq!(payload.contour, "[(0,0),(1000,0),(1000,800),(0,800),(0,0)]");
    assert_eq!(
        payload.furnitures,
        "床:[(200,600),(2200,600),(2200,-900),(200,-900),(200,600)],"
    );
    assert_eq!(payload.room_type, "卧室");
    assert_eq!(payload.style, "无主灯");
}

#[test]
fn test_build_payload_without_room() {
    let mut state = DesignerState::new();
    state.add_furniture("椅子").unwrap();
    assert_eq!(state.build_payload(), Err(SceneError::MissingRoom));
}

#[test]
fn test_degenerate_room_rejected() {
    let mut state = DesignerState::new();
    state.draw_room(Point::new(10.0, 10.0), Point::new(10.5, 60.0));
    assert!(state.canvas.room().is_some());
    assert!(matches!(
        state.build_payload(),
        Err(SceneError::DegenerateRoom { .. })
    ));

    state.min_room_side = 0.0;
    assert!(state.build_payload().is_ok());
}

#[test]
fn test_unknown_selection_rejected() {
    let mut state = bedroom();
    assert_eq!(
        state.set_room_type("阳台"),
        Err(SceneError::UnknownRoomType {
            label: "阳台".to_string()
        })
    );
    assert_eq!(state.room_type, "客厅");

    state.lighting_style = "吊灯".to_string();
    assert_eq!(
        state.build_payload(),
        Err(SceneError::UnknownLightingStyle {
            label: "吊灯".to_string()
        })
    );
}

#[test]
fn test_unknown_preset() {
    let mut state = DesignerState::new();
    assert_eq!(
        state.add_furniture("钢琴"),
        Err(SceneError::UnknownPreset {
            name: "钢琴".to_string()
        })
    );
    assert!(state.canvas.furniture().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_custom_catalog() {
    let mut catalog = Catalog::default();
    catalog.room_types = vec!["书房".to_string()];
    catalog.presets.add(FurniturePreset::new("书架", 100.0, 30.0));

    let mut state = DesignerState::with_catalog(catalog);
    assert_eq!(state.room_type, "书房");
    let id = state.add_furniture("书架").unwrap();
    assert_eq!(
        state.canvas.scene().rect(id.into()),
        Some(Rect::new(20.0, 20.0, 100.0, 30.0))
    );
}

#[test]
fn test_pointer_drawing_is_recorded() {
    let mut state = DesignerState::new();
    state.handle_pointer(PointerEvent::Down(Point::new(0.0, 0.0)));
    state.handle_pointer(PointerEvent::Move(Point::new(60.0, 40.0)));
    assert!(!state.can_undo());
    state.handle_pointer(PointerEvent::Up);

    assert!(state.can_undo());
    assert_eq!(state.undo_name(), Some("Draw Room"));
    assert!(state.is_modified);
}

#[test]
fn test_draw_room_replaces_existing() {
    let mut state = bedroom();
    let room = state.draw_room(Point::new(200.0, 200.0), Point::new(100.0, 150.0));
    assert_eq!(room, Some(Rect::new(100.0, 150.0, 100.0, 50.0)));
    assert_eq!(state.canvas.room(), room);

    assert_eq!(state.undo_name(), Some("Draw Room"));
    assert!(state.undo());
    assert_eq!(state.canvas.room(), Some(Rect::new(0.0, 0.0, 100.0, 80.0)));
    assert!(state.undo());
    assert!(state.canvas.room().is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_draw_room_off_canvas_keeps_room() {
    let mut state = bedroom();
    state.is_modified = false;

    let room = state.draw_room(Point::new(-50.0, -50.0), Point::new(10.0, 10.0));
    assert_eq!(room, None);
    assert_eq!(state.canvas.room(), Some(Rect::new(0.0, 0.0, 100.0, 80.0)));
    assert!(!state.is_modified);

    assert!(state.undo());
    assert!(state.canvas.room().is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_unknown_shape_operations_are_noops() {
    let mut state = DesignerState::new();
    assert!(!state.move_shape(ShapeId::Room, 10.0, 10.0));
    assert!(!state.delete_shape(ShapeId::Room));
    assert!(!state.resize_shape(ShapeId::Room, 1.0, 1.0, 0.0, 0.0));
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

#[test]
fn test_rename_furniture() {
    let mut state = bedroom();
    let id = state.add_furniture("床").unwrap();
    assert!(state.rename_furniture(id, "双人床"));

    let payload = state.build_payload().unwrap();
    assert!(payload.furnitures.starts_with("双人床:"));

    state.undo();
    assert_eq!(state.canvas.furniture()[0].name, "床");
}
