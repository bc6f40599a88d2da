use serde::{Deserialize, Serialize};

/// `data` payload of a successful bulk inventory upload.
///
/// The backend may grow this shape; unknown fields are ignored on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUploadReport {
    #[serde(default)]
    pub processed: u32,
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub updated: u32,
}
