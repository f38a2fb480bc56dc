//! Runtime configuration
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | AQUA_DATA_DIR | ./data | 数据目录（数据库和收据） |
//! | AQUA_GEOCODER_URL | nominatim.openstreetmap.org | 反向地理编码服务地址 |
//! | AQUA_DISCOUNT_500ML | 0.45 | 500ml 折扣率 |
//! | AQUA_DISCOUNT_1000ML | 0.30 | 1L 折扣率 |

use shared::pricing::DiscountRates;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory for the database and generated receipts
    pub data_dir: PathBuf,
    /// Reverse geocoding service base URL
    pub geocoder_url: String,
    /// Per-size discount rates applied to the catalog prices
    pub rates: DiscountRates,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = DiscountRates::standard();
        Self {
            data_dir: std::env::var("AQUA_DATA_DIR")
                .unwrap_or_else(|_| "./data".into())
                .into(),
            geocoder_url: std::env::var("AQUA_GEOCODER_URL")
                .unwrap_or_else(|_| aqua_geo::DEFAULT_BASE_URL.into()),
            rates: DiscountRates::new(
                std::env::var("AQUA_DISCOUNT_500ML")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ml500),
                std::env::var("AQUA_DISCOUNT_1000ML")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ml1000),
            ),
        }
    }

    /// Path of the redb database file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("aquavita.redb")
    }
}
