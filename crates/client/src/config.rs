use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so the browser build has
/// no filesystem dependency.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Compile-time override for `[api] base_url`.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("DOCTORS_API_BASE_URL");

/// Parse config file contents, falling back to defaults when they are invalid.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> AppConfig {
    let config = toml::from_str::<AppConfig>(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    });
    config.with_base_url_override(base_url_override)
}

/// The application config, parsed once on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML, BASE_URL_OVERRIDE);
        tracing::debug!(base_url = %config.api.base_url, page_size = config.dashboard.page_size, "Loaded config");
        config
    })
}
