use crate::common::env::FromEnv;
use std::ops::Deref;
use std::sync::LazyLock;
use tracing::Level;

pub struct AppSettings {
    pub level: Level,
    pub seed_demo_data: bool,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env_or("LOG_LEVEL", Level::INFO)?;
        let seed_demo_data = bool::from_env_or("SEED_DEMO_DATA", true)?;

        Ok(AppSettings {
            level,
            seed_demo_data,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
