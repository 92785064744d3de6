//! Tests for the featured app literal
//!
//! Checks the shape and wire layout of the record served by `/app.json`.

use appstore_mock_domain::{catalog::featured_app, AppDetail};
use serde_json::Value;

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_featured_app_fields() {
    let app = featured_app();

    assert_eq!(app.id, 1);
    assert_eq!(app.name, "极简天气");
    assert_eq!(app.version, "1.0.0");
    assert_eq!(app.website, "https://example.com");
    assert_eq!(app.rating, 4.5);
    assert!(app.description.starts_with("一款极简风格的天气应用"));
}

#[test]
fn test_featured_app_screens() {
    let app = featured_app();

    assert_eq!(app.screens.len(), 3);
    for (index, screen) in app.screens.iter().enumerate() {
        assert!(screen.starts_with("https://via.placeholder.com/290x290/"));
        assert!(screen.ends_with(&format!("?text=Screen{}", index + 1)));
    }
}

#[test]
fn test_featured_app_reviews() {
    let app = featured_app();

    assert_eq!(app.reviews.len(), 3);
    let ratings: Vec<i32> = app.reviews.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![5, 4, 5]);

    let dates: Vec<&str> = app.reviews.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_serialized_field_order() {
    let json = serde_json::to_value(featured_app()).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    // Key set first; raw ordering is checked on the encoded text below.
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        vec![
            "description",
            "iconURL",
            "id",
            "name",
            "rating",
            "reviews",
            "screens",
            "version",
            "website",
        ]
    );

    let raw = serde_json::to_string(featured_app()).unwrap();
    let positions: Vec<usize> = [
        "\"id\"",
        "\"name\"",
        "\"version\"",
        "\"description\"",
        "\"iconURL\"",
        "\"screens\"",
        "\"website\"",
        "\"rating\"",
        "\"reviews\"",
    ]
    .iter()
    .map(|key| raw.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_non_ascii_is_not_escaped() {
    let raw = serde_json::to_string(featured_app()).unwrap();
    assert!(raw.contains("极简天气"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn test_review_keys() {
    let json = serde_json::to_value(featured_app()).unwrap();
    let review = &json["reviews"][0];

    assert_eq!(review["author"], Value::from("用户1"));
    assert_eq!(review["rating"], Value::from(5));
    assert_eq!(review["comment"], Value::from("非常好用的天气应用，界面简洁美观"));
    assert_eq!(review["date"], Value::from("2024-01-01"));
}

#[test]
fn test_client_can_decode() {
    let raw = serde_json::to_vec(featured_app()).unwrap();
    let decoded: AppDetail = serde_json::from_slice(&raw).unwrap();
    assert_eq!(&decoded, featured_app());
}
