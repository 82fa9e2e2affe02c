use std::{env, fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::errors::{PetFriendsError, Result};


/// Account credentials plus the service endpoint to run against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub email: String,
    pub password: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

pub fn load_settings_from_path<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let f = File::open(path)?;
    let settings: Settings = serde_yaml::from_reader(f)?;
    settings.validate()?;
    Ok(settings)
}

impl Settings {
    /// Read settings from the environment, loading `.env` first when present.
    /// `PETFRIENDS_EMAIL` and `PETFRIENDS_PASSWORD` are required,
    /// `PETFRIENDS_BASE_URL` overrides the production endpoint.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let settings = Self {
            email: require_var("PETFRIENDS_EMAIL")?,
            password: require_var("PETFRIENDS_PASSWORD")?,
            base_url: env::var("PETFRIENDS_BASE_URL").unwrap_or_else(|_| default_base_url()),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(PetFriendsError::ConfigError(
                "email must not be empty".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(PetFriendsError::ConfigError(
                "password must not be empty".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| PetFriendsError::ConfigError(format!("missing environment variable: {name}")))
}
