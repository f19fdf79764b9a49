use crate::application::chart_service::DEFAULT_TICK_COUNT;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_CONFIG_PATH: &str = "config/hockeystats";
pub const DEFAULT_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub tick_count: usize,
    pub width: u32,
    pub height: u32,
}

/// Built-in defaults, overridden by the settings file at `path` when it exists.
pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.timeout_secs", 10_i64)?
        .set_default("chart.tick_count", DEFAULT_TICK_COUNT as i64)?
        .set_default("chart.width", 1024_i64)?
        .set_default("chart.height", 400_i64)?
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in an endpoint template with url-encoded values
pub fn expand_endpoint(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }
    result
}
