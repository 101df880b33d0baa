use serde::{Deserialize, Serialize};

/// An integer 2D coordinate returned in interaction replies.
///
/// A plain value type with no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A single interaction: a clicked coordinate plus the caller's opaque
/// state token.
///
/// Every field is optional on the wire. Absent fields decode to their zero
/// values (empty string, 0); unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InteractRequest {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
}

/// The reply to an interaction: the updated state token and the point
/// groups to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractResponse {
    pub state: String,
    #[serde(rename = "pointsList")]
    pub points_list: Vec<Vec<Point>>,
}
