//! Aquavita ordering demo
//!
//! Walks a scripted order through the three-step wizard and writes the
//! receipt PDF into the data directory. If `AQUA_DETECT_LAT`/`AQUA_DETECT_LON`
//! are set, runs a live location detection first.

use anyhow::Context;
use aqua_geo::{DetectGuard, ReverseGeocoder};
use aqua_order::detect::detect_and_save;
use aqua_order::{Config, LocationStore, OrderWizard};
use shared::error::AppError;
use shared::models::{BottleSize, BrandInfo, SavedLocation, PICKER_CITIES};
use shared::pricing::format_amount;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqua_order=info,aqua_geo=info".into()),
        )
        .init();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

    let store = LocationStore::open(config.store_path())
        .with_context(|| format!("opening store at {}", config.store_path().display()))?;

    // Optional live detection, driven by an injected device position
    if aqua_geo::env_has_position() {
        let guard = DetectGuard::default();
        let geocoder = ReverseGeocoder::with_base_url(&config.geocoder_url);
        match detect_and_save(&guard, &geocoder, &store, aqua_geo::env_position).await {
            Ok(location) => tracing::info!("detected city: {}", location.city),
            Err(e) => {
                let err = AppError::from(e);
                tracing::warn!(code = u16::from(err.code), "location detection failed: {}", err);
            }
        }
    }

    match store.get_or_none() {
        Some(saved) => tracing::info!("saved delivery city: {}", saved.city),
        None => {
            let picked = SavedLocation::picked(PICKER_CITIES[0]);
            store.set(&picked)?;
            tracing::info!("no saved city, defaulting to {}", picked.city);
        }
    }

    // Scripted order: fill the address, pick quantities, check out
    let mut wizard = OrderWizard::new(config.rates);
    {
        let location = wizard.location_mut();
        location.state = "Telangana".to_string();
        location.district = "Hyderabad".to_string();
        location.mandal = "Serilingampally".to_string();
        location.village = "Gachibowli".to_string();
    }
    wizard.advance().context("location step should pass")?;

    wizard.set_quantity(1, BottleSize::Ml500, 2)?;
    wizard.set_quantity(2, BottleSize::Ml1000, 1)?;
    wizard.advance().context("items step should pass")?;

    let confirmation = wizard.place_order(&store)?;
    tracing::info!(
        "order {} placed, total {}",
        confirmation.order_id,
        format_amount(confirmation.total)
    );

    let receipt = wizard.build_receipt(&confirmation.order_id, &BrandInfo::default())?;
    let path = aqua_receipt::save_to_dir(&receipt, &config.data_dir)?;
    tracing::info!("receipt written to {}", path.display());

    Ok(())
}
