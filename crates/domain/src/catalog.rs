//! The static catalog backing the mock store.
//!
//! The store only ever knows about one application. It is built on first
//! access and lives for the rest of the process.

use crate::app::{AppDetail, Review};
use once_cell::sync::Lazy;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/290x290";

static FEATURED_APP: Lazy<AppDetail> = Lazy::new(|| AppDetail {
    id: 1,
    name: "极简天气".to_string(),
    version: "1.0.0".to_string(),
    description: "一款极简风格的天气应用，提供准确的天气预报和实时天气信息。界面简洁美观，功能实用，支持多城市天气查询，实时更新天气数据。".to_string(),
    icon_url: placeholder("007AFF", "Weather"),
    screens: vec![
        placeholder("FF9500", "Screen1"),
        placeholder("FF2D92", "Screen2"),
        placeholder("5856D6", "Screen3"),
    ],
    website: "https://example.com".to_string(),
    rating: 4.5,
    reviews: vec![
        Review::new("用户1", 5, "非常好用的天气应用，界面简洁美观", "2024-01-01"),
        Review::new("用户2", 4, "界面简洁，功能齐全，推荐使用", "2024-01-02"),
        Review::new("用户3", 5, "天气预报很准确，界面设计很棒", "2024-01-03"),
    ],
});

fn placeholder(background: &str, text: &str) -> String {
    format!("{PLACEHOLDER_BASE}/{background}/FFFFFF?text={text}")
}

/// The single application served by `/app.json`
pub fn featured_app() -> &'static AppDetail {
    &FEATURED_APP
}
