use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body returned by every mutating endpoint,
/// on success and on error alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
