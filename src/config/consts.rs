// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SPOTS_PATH: &str = "/api/v1/spots";
pub const USER_AGENT: &str = concat!("spot_viewer/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Envelope status values
pub const STATUS_OK: &str = "OK";
pub const STATUS_CREATED: &str = "Created";

// Local store (logs)
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "downloads";
pub const EXPORT_STEM: &str = "filtered_data";
pub const PERFORMER_SEP_CSV: &str = "; ";
pub const PERFORMER_SEP_DISPLAY: &str = ", ";

// Environment overrides
pub const ENV_API_URL: &str = "SPOTS_API_URL";
pub const ENV_OUT_DIR: &str = "SPOTS_OUT_DIR";
pub const ENV_TIMEOUT: &str = "SPOTS_TIMEOUT_SECS";
pub const LOG_ENV: &str = "SPOTS_LOG";
