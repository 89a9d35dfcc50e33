// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, overridden by `SPOTS_*` environment variables (and `.env`, if the
    /// binary loaded one). Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable lookup (tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|s| !s.trim().is_empty()) {
            opts.api.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(dir) = lookup(ENV_OUT_DIR).filter(|s| !s.trim().is_empty()) {
            opts.export.out_dir = PathBuf::from(dir.trim());
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => opts.api.timeout_secs = secs,
                Err(e) => logw!("Config: ignoring {}={:?} ({})", ENV_TIMEOUT, raw, e),
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    /// Scheme + host (+ port), no trailing slash.
    pub base_url: String,
    /// 0 disables the timeout.
    pub timeout_secs: u64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiOptions {
    pub fn spots_url(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), SPOTS_PATH)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Json => "json", ExportFormat::Csv => "csv" }
    }
    pub fn mime(&self) -> &'static str {
        match self { ExportFormat::Json => "application/json", ExportFormat::Csv => "text/csv" }
    }
    pub fn file_name(&self) -> String {
        join!(EXPORT_STEM, ".", self.ext())
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Json => "JSON", ExportFormat::Csv => "CSV" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory that receives `filtered_data.{json,csv}`.
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    /// Parse GUI text into the output directory.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn env_overrides_defaults() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_API_URL, "http://spots.local:8080/"),
            (ENV_OUT_DIR, "exports"),
            (ENV_TIMEOUT, "0"),
        ]));
        assert_eq!(opts.api.spots_url(), "http://spots.local:8080/api/v1/spots");
        assert_eq!(opts.export.out_dir, PathBuf::from("exports"));
        assert_eq!(opts.api.timeout(), None);
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let opts = AppOptions::from_lookup(lookup(&[(ENV_TIMEOUT, "soon")]));
        assert_eq!(opts.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(opts.api.spots_url(), "http://127.0.0.1:5000/api/v1/spots");
    }

    #[test]
    fn export_dir_and_file_names() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_dir, PathBuf::from("downloads"));
        export.set_dir("  ");
        assert_eq!(export.out_dir, PathBuf::from("downloads"));
        export.set_dir(" out/spots ");
        assert_eq!(export.out_dir, PathBuf::from("out/spots"));
        assert_eq!(ExportFormat::Json.file_name(), "filtered_data.json");
        assert_eq!(ExportFormat::Csv.file_name(), "filtered_data.csv");
        assert_eq!(ExportFormat::Json.mime(), "application/json");
    }
}
