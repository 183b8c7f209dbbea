use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tick_core::timezone::validate_timezone;

const DEFAULT_DATABASE_PATH: &str = "tick.db";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Location of the SQLite file
    pub database_path: String,
    /// IANA timezone that defines "today"; detected from the system when unset
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            timezone: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("tick.toml"))
            .merge(Env::prefixed("TICK_").only(&["database_path", "timezone"]))
    }

    /// The configured timezone, or the detected system one.
    pub fn timezone(&self) -> anyhow::Result<Tz> {
        match &self.timezone {
            Some(name) => Ok(validate_timezone(name)?),
            None => Ok(validate_timezone(&detect_system_timezone())?),
        }
    }
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if validate_timezone(tz).is_ok() {
                return tz.to_string();
            }
        }
    }

    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}
