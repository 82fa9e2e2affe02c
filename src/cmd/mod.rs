use std::time::Instant;

use clap::Parser;
use tracing::{info, instrument, warn};

use crate::api::PetFriends;
use crate::api::models::{AuthKey, PetFilter, PetList};
use crate::config::{Settings, load_settings_from_path};
use crate::errors::{PetFriendsError, Result};

/// CLI
#[derive(Parser, Debug)]
#[command(
    name = "petfriends",
    version,
    about = "Smoke-check the PetFriends pet-store API.",
    long_about = "Smoke-check the PetFriends pet-store API.\n\
Authenticates with the configured account, lists pets under the chosen filter\n\
and reports what the service returned.\n\n\
Resources:\n  • YAML config: account credentials and optional base URL\n  • Environment: PETFRIENDS_EMAIL / PETFRIENDS_PASSWORD / PETFRIENDS_BASE_URL"
)]
pub struct Cli {
    #[arg(
        long = "yaml-config",
        short = 'y',
        value_name = "FILE",
        default_value = "petfriends.yaml"
    )]
    pub yaml_config: String,

    /// Listing filter: all or my_pets
    #[arg(long = "filter", short = 'f', value_name = "FILTER", default_value = "all")]
    pub filter: PetFilter,
}

#[instrument(skip_all, fields(cfg_path = %cli.yaml_config))]
pub async fn run_smoke(cli: &Cli) -> Result<()> {
    info!("starting petfriends smoke run");

    let t0 = Instant::now();

    let settings = match load_settings_from_path(&cli.yaml_config) {
        Ok(s) => {
            info!("loaded yaml config");
            s
        }
        Err(_) => {
            info!("yaml config unavailable, reading environment");
            Settings::from_env()?
        }
    };

    let client = PetFriends::with_base_url(&settings.base_url)?;

    let auth = client
        .get_api_key(&settings.email, &settings.password)
        .await?;
    if !auth.is_ok() {
        warn!(status = %auth.status, "authentication rejected");
        return Err(PetFriendsError::SmokeError(format!(
            "authentication failed with status {}",
            auth.status
        )));
    }
    let key: AuthKey = auth.json()?;
    info!("auth key issued");

    let listing = client.get_list_of_pets(&key.key, cli.filter).await?;
    if !listing.is_ok() {
        warn!(status = %listing.status, "listing rejected");
        return Err(PetFriendsError::SmokeError(format!(
            "pet listing failed with status {}",
            listing.status
        )));
    }
    let pets: PetList = listing.json()?;
    info!(filter = ?cli.filter, count = pets.pets.len(), "listing received");

    info!(
        total_ms = t0.elapsed().as_millis() as u64,
        "smoke run finished"
    );
    Ok(())
}
