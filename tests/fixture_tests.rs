// ABOUTME: Integration tests for the fixture-driven preview commands
// ABOUTME: Tests end-to-end rendering and validation of JSON render requests

use tempfile::TempDir;
use tokio::fs;

use locview::cli::commands::{check_fixture, render_page, RenderRequest};
use locview::cli::Config;

mod common;

const FULL_FIXTURE: &str = r#"{
    "location": {
        "id": 2,
        "name": {"en": "Freezer", "de": "Gefrierschrank"},
        "description": {"en": "Third floor, -80C"}
    },
    "ancestors": [
        {"id": 1, "name": "Basement"}
    ],
    "locations_tree": {"3": {}, "4": {}},
    "locations_map": {
        "3": {"id": 3, "name": "Upper Shelf"},
        "4": {"id": 4, "name": "Lower Shelf"}
    },
    "permissions": ["READ", "WRITE", "GRANT"],
    "locale": "en"
}"#;

#[tokio::test]
async fn test_render_fixture_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("freezer.json");
    let output_file = temp_dir.path().join("freezer.html");
    fs::write(&fixture_file, FULL_FIXTURE).await.unwrap();

    render_page(
        fixture_file,
        Some(output_file.clone()),
        None,
        &Config::default(),
    )
    .await
    .unwrap();

    let html = fs::read_to_string(&output_file).await.unwrap();
    assert!(html.contains("Location #2"));
    assert!(html.contains("Freezer"));
    assert!(html.contains("<a href=\"/locations/1\">Basement</a>"));
    assert!(html.contains("Third floor, -80C"));
    assert!(html.contains("Edit Location"));
    assert!(html.contains("Edit Permissions"));

    // Sub-locations sorted by name: Lower Shelf before Upper Shelf.
    let lower = html.find("Lower Shelf").unwrap();
    let upper = html.find("Upper Shelf").unwrap();
    assert!(lower < upper);
}

#[tokio::test]
async fn test_render_respects_locale_override() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("freezer.json");
    let output_file = temp_dir.path().join("freezer.html");
    fs::write(&fixture_file, FULL_FIXTURE).await.unwrap();

    render_page(
        fixture_file,
        Some(output_file.clone()),
        Some("de".to_string()),
        &Config::default(),
    )
    .await
    .unwrap();

    let html = fs::read_to_string(&output_file).await.unwrap();
    assert!(html.contains("lang=\"de\""));
    assert!(html.contains("Gefrierschrank"));
}

#[tokio::test]
async fn test_check_accepts_valid_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("freezer.json");
    fs::write(&fixture_file, FULL_FIXTURE).await.unwrap();

    check_fixture(fixture_file, &Config::default()).await.unwrap();
}

#[tokio::test]
async fn test_check_rejects_tree_id_missing_from_map() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("broken.json");
    fs::write(
        &fixture_file,
        r#"{"location": {"id": 1}, "locations_tree": {"9": {}}, "locations_map": {}}"#,
    )
    .await
    .unwrap();

    let result = check_fixture(fixture_file, &Config::default()).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("9"));
}

#[tokio::test]
async fn test_check_rejects_malformed_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let fixture_file = temp_dir.path().join("broken.json");
    fs::write(&fixture_file, "{\"location\": 5}").await.unwrap();

    assert!(check_fixture(fixture_file, &Config::default()).await.is_err());
}

#[test]
fn test_fixture_round_trip() {
    let request: RenderRequest = serde_json::from_str(FULL_FIXTURE).unwrap();
    let json = serde_json::to_string(&request).unwrap();
    let reparsed: RenderRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(reparsed.location.id, 2);
    assert_eq!(reparsed.ancestors.len(), 1);
    assert_eq!(reparsed.locations_map.len(), 2);
}
