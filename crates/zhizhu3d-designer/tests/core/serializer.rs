use proptest::prelude::*;
use zhizhu3d_core::{Rect, SceneError, EDITOR_SCALE};
use zhizhu3d_designer::{serialize_scene, Scene, ShapeId};

fn room_scene(room: Rect) -> Scene {
    let mut scene = Scene::new();
    scene.set_room(Some(room));
    scene
}

/// Splits `[(x,y),(x,y),...]` into integer pairs.
fn parse_points(s: &str) -> Vec<(i64, i64)> {
    s.trim_start_matches('[')
        .trim_end_matches(']')
        .split("),(")
        .map(|p| {
            let p = p.trim_matches(|c| c == '(' || c == ')');
            let (x, y) = p.split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

#[test]
fn test_bedroom_example() {
    let mut scene = room_scene(Rect::new(0.0, 0.0, 100.0, 80.0));
    scene.add_furniture("床", Rect::new(20.0, 20.0, 200.0, 150.0));

    let payload = serialize_scene(&scene, "无主灯", "卧室", EDITOR_SCALE).unwrap();
    assert_eq!(payload.contour, "[(0,0),(1000,0),(1000,800),(0,800),(0,0)]");
    assert_eq!(
        payload.furnitures,
        "床:[(200,600),(2200,600),(2200,-900),(200,-900),(200,600)],"
    );
    assert_eq!(payload.style, "无主灯");
    assert_eq!(payload.room_type, "卧室");
}

#[test]
fn test_payload_json_field_names() {
    let scene = room_scene(Rect::new(0.0, 0.0, 10.0, 10.0));
    let payload = serialize_scene(&scene, "主灯", "客厅", EDITOR_SCALE).unwrap();
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["type"], "客厅");
    assert_eq!(json["style"], "主灯");
    assert_eq!(json["furnitures"], "");
    assert!(json.get("room_type").is_none());
}

#[test]
fn test_empty_room_contour_is_closed() {
    let scene = room_scene(Rect::new(30.0, 40.0, 120.0, 90.0));
    let payload = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();

    assert_eq!(payload.furnitures, "");
    let points = parse_points(&payload.contour);
    assert_eq!(points.len(), 5);
    assert_eq!(points.first(), points.last());
}

#[test]
fn test_multiple_furniture_concatenate_in_order() {
    let mut scene = room_scene(Rect::new(0.0, 0.0, 100.0, 100.0));
    scene.add_furniture("椅子", Rect::new(0.0, 50.0, 50.0, 50.0));
    scene.add_furniture("桌子", Rect::new(10.0, 0.0, 20.0, 10.0));

    let payload = serialize_scene(&scene, "无主灯", "餐厅", EDITOR_SCALE).unwrap();
    assert_eq!(
        payload.furnitures,
        "椅子:[(0,500),(500,500),(500,0),(0,0),(0,500)],\
         桌子:[(100,1000),(300,1000),(300,900),(100,900),(100,1000)],"
    );
}

#[test]
fn test_furniture_left_of_room_goes_negative() {
    let mut scene = room_scene(Rect::new(100.0, 100.0, 100.0, 100.0));
    scene.add_furniture("柜子", Rect::new(50.0, 150.0, 20.0, 10.0));

    let payload = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
    assert!(payload.furnitures.starts_with("柜子:[(-500,"));
}

#[test]
fn test_delete_room_then_serialize_fails() {
    let mut scene = room_scene(Rect::new(0.0, 0.0, 100.0, 80.0));
    scene.add_furniture("床", Rect::new(20.0, 20.0, 200.0, 150.0));
    scene.remove(ShapeId::Room);

    assert_eq!(
        serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE),
        Err(SceneError::MissingRoom)
    );
}

#[test]
fn test_zero_size_room_is_serialized() {
    let scene = room_scene(Rect::new(10.0, 10.0, 0.0, 0.0));
    let payload = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
    assert_eq!(payload.contour, "[(0,0),(0,0),(0,0),(0,0),(0,0)]");
}

proptest! {
    #[test]
    fn prop_serializing_twice_is_identical(
        rw in 1.0f64..500.0,
        rh in 1.0f64..500.0,
        fx in -100.0f64..600.0,
        fy in -100.0f64..600.0,
    ) {
        let mut scene = room_scene(Rect::new(10.0, 10.0, rw, rh));
        scene.add_furniture("沙发", Rect::new(fx, fy, 200.0, 90.0));

        let a = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
        let b = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_contour_corners(w in 0u32..1000, h in 0u32..1000) {
        let scene = room_scene(Rect::new(5.0, 7.0, w as f64, h as f64));
        let payload = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
        let points = parse_points(&payload.contour);
        prop_assert_eq!(points[1], (w as i64 * 10, 0));
        prop_assert_eq!(points[2], (w as i64 * 10, h as i64 * 10));
    }

    #[test]
    fn prop_furniture_bottom_left_in_room_frame(
        rx in -200i32..200,
        ry in -200i32..200,
        rh in 0i32..400,
        fx in -200i32..600,
        fy in -200i32..600,
        fw in 0i32..300,
        fh in 0i32..300,
    ) {
        let mut scene = room_scene(Rect::new(rx as f64, ry as f64, 100.0, rh as f64));
        scene.add_furniture("桌子", Rect::new(fx as f64, fy as f64, fw as f64, fh as f64));

        let payload = serialize_scene(&scene, "无主灯", "客厅", EDITOR_SCALE).unwrap();
        let body = payload.furnitures.strip_prefix("桌子:").unwrap();
        let body = body.strip_suffix(',').unwrap();
        let points = parse_points(body);

        let expected = (
            ((fx - rx) * 10) as i64,
            (((ry + rh) - (fy + fh)) * 10) as i64,
        );
        prop_assert_eq!(points.len(), 5);
        prop_assert_eq!(points[3], expected);
        prop_assert_eq!(points[0], points[4]);
    }
}
