use log::Level;
use web_sys::window;

/// Mapbox access token baked in at build time; individual browsers can
/// still override it through localStorage.
const BUILD_TIME_ACCESS_TOKEN: Option<&str> = option_env!("MAPBOX_ACCESS_TOKEN");

const DEFAULT_MAP_STYLE_URL: &str = "mapbox://styles/placermapteam/cm72gi2bm008501s833pccde9";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Mapbox access token; empty means "map unavailable"
    pub mapbox_access_token: String,

    /// Mapbox style URL for the trade-area map
    pub map_style_url: String,

    /// Initial map zoom level
    pub map_zoom: f64,

    /// How long to wait for the mapping library before giving up (ms)
    pub map_load_timeout_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mapbox_access_token: BUILD_TIME_ACCESS_TOKEN.unwrap_or("").to_string(),
            map_style_url: DEFAULT_MAP_STYLE_URL.to_string(),
            map_zoom: 10.0,
            map_load_timeout_ms: 10_000,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        // Detect if running in development mode
        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Try to read from localStorage for custom settings
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(token)) = storage.get_item("housing_survey_mapbox_token") {
                    settings.mapbox_access_token = token;
                }

                if let Ok(Some(style_url)) = storage.get_item("housing_survey_map_style") {
                    settings.map_style_url = style_url;
                }

                if let Ok(Some(zoom)) = storage.get_item("housing_survey_map_zoom") {
                    if let Ok(zoom_val) = zoom.parse::<f64>() {
                        settings.map_zoom = zoom_val;
                    }
                }

                if let Ok(Some(timeout)) = storage.get_item("housing_survey_map_load_timeout_ms") {
                    if let Ok(timeout_val) = timeout.parse::<u32>() {
                        settings.map_load_timeout_ms = timeout_val;
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item("housing_survey_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
