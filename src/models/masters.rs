use serde::{Deserialize, Serialize};

/// Department master row. Charts follow seq order; color is an optional
/// #rrggbb hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub seq: i64,
    pub is_display: bool,
    pub color: Option<String>,
}

/// Ward master row. Same shape as Department, independent namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ward {
    pub id: String,
    pub name: String,
    pub seq: i64,
    pub is_display: bool,
    pub color: Option<String>,
}
