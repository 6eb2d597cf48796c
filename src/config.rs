//! Runtime configuration read from the environment.
//!
//! Only logging is configurable. The risk model itself is fixed.

use std::path::PathBuf;

use crate::NdlvcError;

/// Environment variable selecting the log destination.
pub const LOG_MODE_VAR: &str = "NDLVC_LOG_MODE";

/// Environment variable holding the log file path.
pub const LOG_FILE_VAR: &str = "NDLVC_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "ndlvc-risk.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when running the interactive UI on a terminal, stderr otherwise
    #[default]
    Auto,
    File,
    Stderr,
}

impl std::str::FromStr for LogMode {
    type Err = NdlvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stderr" | "stdout" => Ok(Self::Stderr),
            other => Err(NdlvcError::Config(format!(
                "{LOG_MODE_VAR}: unknown mode '{other}' (expected auto, file or stderr)"
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub mode: LogMode,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            mode: LogMode::Auto,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LogConfig {
    /// Read from the process environment.
    ///
    /// # Errors
    /// Returns error if `NDLVC_LOG_MODE` holds an unknown value.
    pub fn from_env() -> Result<Self, NdlvcError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns error if the mode value is unknown.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NdlvcError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(LOG_MODE_VAR) {
            Some(value) => value.parse()?,
            None => LogMode::Auto,
        };
        let file = lookup(LOG_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self { mode, file })
    }

    /// Whether logs should be written to `self.file`.
    ///
    /// Writing to the terminal would corrupt the alternate screen, so the
    /// interactive UI logs to a file unless told otherwise.
    #[must_use]
    pub fn use_file(&self, interactive_ui: bool) -> bool {
        match self.mode {
            LogMode::File => true,
            LogMode::Stderr => false,
            LogMode::Auto => interactive_ui,
        }
    }
}

/// Default `EnvFilter` directive for a `-v` count.
#[must_use]
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(lookup(&[])).expect("Should parse");
        assert_eq!(config, LogConfig::default());
        assert!(config.use_file(true));
        assert!(!config.use_file(false));
    }

    #[test]
    fn test_explicit_modes() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_MODE_VAR, "FILE"),
            (LOG_FILE_VAR, "/tmp/ndlvc.log"),
        ]))
        .expect("Should parse");
        assert_eq!(config.mode, LogMode::File);
        assert_eq!(config.file, PathBuf::from("/tmp/ndlvc.log"));
        assert!(config.use_file(false));

        let config =
            LogConfig::from_lookup(lookup(&[(LOG_MODE_VAR, "stderr")])).expect("Should parse");
        assert!(!config.use_file(true));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = LogConfig::from_lookup(lookup(&[(LOG_MODE_VAR, "syslog")]));
        assert!(matches!(err, Err(NdlvcError::Config(_))));
    }

    #[test]
    fn test_blank_file_falls_back() {
        let config =
            LogConfig::from_lookup(lookup(&[(LOG_FILE_VAR, "  ")])).expect("Should parse");
        assert_eq!(config.file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(default_filter(0), "info");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }
}
