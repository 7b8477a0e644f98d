// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup configuration.

use chrono_tz::Tz;
use premia_domain::{DomainError, PremiumRules, parse_time_zone};
use std::path::{Path, PathBuf};
use tracing::info;

/// Time zone used to decide what "today" is when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

/// Errors raised while loading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The rules file could not be read.
    #[error("Failed to read rules file {path}: {source}")]
    ReadRules {
        /// The rules file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The rules file is not valid JSON for `PremiumRules`.
    #[error("Failed to parse rules file {path}: {source}")]
    ParseRules {
        /// The rules file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },
    /// The rules or time zone failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

/// Loads premium rules, falling back to the defaults when no file is given.
///
/// Fields missing from the file keep their default values.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the rules are
/// invalid.
pub fn load_rules(path: Option<&Path>) -> Result<PremiumRules, ConfigError> {
    let rules: PremiumRules = match path {
        Some(path) => {
            let contents: String =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ReadRules {
                    path: path.to_path_buf(),
                    source,
                })?;
            let rules: PremiumRules =
                serde_json::from_str(&contents).map_err(|source| ConfigError::ParseRules {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!(path = %path.display(), "Loaded premium rules");
            rules
        }
        None => {
            info!("Using default premium rules");
            PremiumRules::default()
        }
    };

    rules.validate()?;
    Ok(rules)
}

/// Resolves the configured time zone.
///
/// # Errors
///
/// Returns an error if the name is not a known IANA zone.
pub fn load_time_zone(name: Option<&str>) -> Result<Tz, ConfigError> {
    Ok(parse_time_zone(name.unwrap_or(DEFAULT_TIME_ZONE))?)
}
