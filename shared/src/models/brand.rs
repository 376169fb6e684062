//! Brand Model

use super::{Status, impl_catalog_record};
use serde::{Deserialize, Serialize};

/// Brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// Stored image path, relative to the backend's public storage
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl_catalog_record!(Brand);
