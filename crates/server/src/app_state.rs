use crate::{api::CalcDefaults, config::Settings};

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) defaults: CalcDefaults,
}

impl AppState {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        Self {
            defaults: CalcDefaults {
                control_km: settings.default_control_km,
                brevet_km: i64::from(settings.default_brevet_km),
            },
        }
    }
}
