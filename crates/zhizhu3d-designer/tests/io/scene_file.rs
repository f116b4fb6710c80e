use tempfile::tempdir;
use zhizhu3d_core::{Point, Rect};
use zhizhu3d_designer::{DesignerState, SceneFile};

#[test]
fn test_save_and_load_scene() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bedroom.json");

    let mut state = DesignerState::new();
    state.design_name = "Bedroom".to_string();
    state.draw_room(Point::new(0.0, 0.0), Point::new(100.0, 80.0));
    state.add_furniture("床").unwrap();
    state.add_furniture("柜子").unwrap();
    state.set_room_type("卧室").unwrap();
    state.set_lighting_style("主灯").unwrap();
    let payload = state.build_payload().unwrap();

    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();

    assert_eq!(loaded.design_name, "Bedroom");
    assert_eq!(loaded.room_type, "卧室");
    assert_eq!(loaded.lighting_style, "主灯");
    assert_eq!(loaded.canvas.room(), Some(Rect::new(0.0, 0.0, 100.0, 80.0)));
    assert_eq!(loaded.canvas.furniture(), state.canvas.furniture());
    assert_eq!(loaded.build_payload().unwrap(), payload);
    assert!(!loaded.can_undo());
    assert_eq!(loaded.display_name(), "bedroom.json");
}

#[test]
fn test_loaded_ids_do_not_collide() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut state = DesignerState::new();
    state.add_furniture("椅子").unwrap();
    state.add_furniture("椅子").unwrap();
    state.save_to_file(&path).unwrap();

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    let id = loaded.add_furniture("椅子").unwrap();

    let ids: Vec<_> = loaded.canvas.furniture().iter().map(|f| f.id).collect();
    assert_eq!(ids.iter().filter(|i| **i == id).count(), 1);
}

#[test]
fn test_unknown_labels_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut file = SceneFile::new("odd");
    file.room_type = "阳台".to_string();
    file.save_to_file(&path).unwrap();

    let mut state = DesignerState::new();
    state.load_from_file(&path).unwrap();
    assert_eq!(state.room_type, "客厅");
    assert_eq!(state.lighting_style, "无主灯");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(dir.path().join("nope.json")).is_err());
}

#[test]
fn test_load_corrupt_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut state = DesignerState::new();
    state.draw_room(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert!(state.load_from_file(&path).is_err());
    assert!(state.canvas.room().is_some());
}

#[test]
fn test_new_design_resets() {
    let mut state = DesignerState::new();
    state.draw_room(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    state.new_design();
    assert!(state.canvas.scene().is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

#[test]
fn test_load_normalizes_negative_extents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inverted.json");
    std::fs::write(
        &path,
        r#"{
            "version": "1.0",
            "metadata": {"name": "x", "created": "2024-01-01T00:00:00Z", "modified": "2024-01-01T00:00:00Z"},
            "room": {"x": 0, "y": 0, "width": 100, "height": -80},
            "furniture": [{"id": 1, "name": "床", "x": 20, "y": 20, "width": -200, "height": -150}]
        }"#,
    )
    .unwrap();

    let mut state = DesignerState::new();
    state.load_from_file(&path).unwrap();

    assert_eq!(state.canvas.room(), Some(Rect::new(0.0, 0.0, 100.0, 0.0)));
    assert_eq!(state.canvas.furniture()[0].rect, Rect::new(20.0, 20.0, 0.0, 0.0));
    for f in state.canvas.furniture() {
        assert!(f.rect.width >= 0.0 && f.rect.height >= 0.0);
    }
    assert!(state.build_payload().is_err());
}
