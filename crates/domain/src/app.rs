//! Application metadata served to the store client.

use serde::{Deserialize, Serialize};

/// Detail record for a single application in the store
///
/// Field order matches the wire layout the client decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppDetail {
    /// Numeric application identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Marketing version string
    pub version: String,

    /// Long-form description
    pub description: String,

    /// Icon image URL
    #[serde(rename = "iconURL")]
    pub icon_url: String,

    /// Screenshot URLs, in display order
    pub screens: Vec<String>,

    /// Product website
    pub website: String,

    /// Average rating
    pub rating: f64,

    /// User reviews, newest last
    pub reviews: Vec<Review>,
}

/// A single user review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name
    pub author: String,

    /// Star rating
    pub rating: i32,

    /// Review text
    pub comment: String,

    /// ISO date literal, passed through as-is
    pub date: String,
}

impl Review {
    /// Create a review
    pub fn new(
        author: impl Into<String>,
        rating: i32,
        comment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            rating,
            comment: comment.into(),
            date: date.into(),
        }
    }
}
