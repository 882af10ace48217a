use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

pub type CategoryId = i64;

/// Product category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    /// Build a request from raw input. Returns `None` for a blank name.
    pub fn from_input(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
        })
    }
}
