use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "brevets.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_bind: String,
    pub debug: bool,
    pub default_brevet_km: u32,
    pub default_control_km: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            debug: false,
            default_brevet_km: 200,
            default_control_km: 999.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    port: Option<u16>,
    debug: Option<bool>,
    default_brevet_km: Option<u32>,
    default_control_km: Option<f64>,
}

impl Settings {
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.bind_addr {
            self.server_bind = v;
        }
        if let Some(port) = file_cfg.port {
            self.server_bind = public_bind(port);
        }
        if let Some(v) = file_cfg.debug {
            self.debug = v;
        }
        if let Some(v) = file_cfg.default_brevet_km {
            self.default_brevet_km = v;
        }
        if let Some(v) = file_cfg.default_control_km {
            self.default_control_km = v;
        }
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("BREVETS_BIND") {
            self.server_bind = v;
        }
        if let Some(v) = var("APP__BIND_ADDR") {
            self.server_bind = v;
        }

        for key in ["PORT", "APP__PORT"] {
            if let Some(port) = var(key).and_then(|v| v.parse::<u16>().ok()) {
                self.server_bind = public_bind(port);
            }
        }

        if let Some(v) = var("APP__DEBUG") {
            self.debug = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(parsed) = var("APP__DEFAULT_BREVET_KM").and_then(|v| v.parse::<u32>().ok()) {
            self.default_brevet_km = parsed;
        }
        if let Some(parsed) = var("APP__DEFAULT_CONTROL_KM").and_then(|v| v.parse::<f64>().ok()) {
            self.default_control_km = parsed;
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

fn load_settings_from(
    path: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => settings
            .apply_file(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    settings.apply_env(var);
    Ok(settings)
}

fn public_bind(port: u16) -> String {
    format!("0.0.0.0:{port}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
