use tempfile::tempdir;
use zhizhu3d_core::{GenerationRequest, GenerationResult, Lighting2D};
use zhizhu3d_designer::ResultHistory;

fn request() -> GenerationRequest {
    GenerationRequest {
        contour: "[(0,0),(1000,0),(1000,800),(0,800),(0,0)]".to_string(),
        furnitures: String::new(),
        style: "无主灯".to_string(),
        room_type: "客厅".to_string(),
    }
}

fn result(url: &str) -> GenerationResult {
    GenerationResult {
        lighting_2d: Some(Lighting2D {
            download_url: Some(url.to_string()),
            image_data: None,
        }),
        content: Some("design intent".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_missing_file_is_empty_history() {
    let dir = tempdir().unwrap();
    let history = ResultHistory::load(dir.path().join("history.json"), 10).unwrap();
    assert!(history.is_empty());
    assert_eq!(history.max_entries(), 10);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");

    let mut history = ResultHistory::new(5);
    history.push(request(), result("https://example.com/a.png"));
    let newest = history.push(request(), result("https://example.com/b.png"));
    history.save(&path).unwrap();

    let loaded = ResultHistory::load(&path, 5).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.latest().map(|e| e.id), Some(newest));
    assert_eq!(
        loaded.get(newest).and_then(|e| e.result.download_url()),
        Some("https://example.com/b.png")
    );
    assert_eq!(loaded.entries(), history.entries());
}

#[test]
fn test_reload_with_smaller_bound() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut history = ResultHistory::new(10);
    for n in 0..4 {
        history.push(request(), result(&format!("https://example.com/{n}.png")));
    }
    history.save(&path).unwrap();

    let loaded = ResultHistory::load(&path, 2).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(
        loaded.latest().and_then(|e| e.result.download_url()),
        Some("https://example.com/3.png")
    );
}

#[test]
fn test_corrupt_file_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "[{\"id\": 1}]").unwrap();
    assert!(ResultHistory::load(&path, 10).is_err());
}
