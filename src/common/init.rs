use crate::common::state::AppState;
use crate::entities::badges::demo_catalog;
use crate::entities::members::demo_roster;
use crate::settings::AppSettings;

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        // .json()
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub fn initialize_state(settings: &AppSettings) -> AppState {
    if settings.seed_demo_data {
        AppState::seeded(demo_catalog(), demo_roster())
    } else {
        AppState::empty()
    }
}
