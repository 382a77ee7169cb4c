use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

const DEFAULT_PORT: i64 = 3001;
const DEFAULT_DATABASE_NAME: &str = "test";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub environment: Environment,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    /// MongoDB connection string. Absent means "use the seeded in-memory
    /// store", which is only allowed outside production.
    pub url: Option<String>,
    /// Database used when the connection string does not name one.
    pub name: String,
}

impl Settings {
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|err| config::ConfigError::Foreign(Box::new(err)))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|_| config::ConfigError::Message("Failed to parse APP_ENVIRONMENT".into()))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .set_default("application.port", DEFAULT_PORT)?
        .set_default("application.host", "0.0.0.0")?
        .set_default("database.name", DEFAULT_DATABASE_NAME)?
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("TRAVEL")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override("application.environment", environment.to_string())?
        .set_override_option("application.port", std::env::var("PORT").ok())?
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
