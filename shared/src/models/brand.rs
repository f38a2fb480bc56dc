//! Brand Info Model

use serde::{Deserialize, Serialize};

/// Brand contact details (singleton)
///
/// Feeds the page chrome contact strip and the receipt footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    pub support_phone: String,
    pub support_email: String,
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            name: "Aquavita".to_string(),
            support_phone: "1800 121 1007".to_string(),
            support_email: "wecare@aquavita.co.in".to_string(),
        }
    }
}
