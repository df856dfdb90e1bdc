//! Profiler settings loaded from a TOML file.
//!
//! ```toml
//! [profiler]
//! label_columns = ["metric", "line item"]
//! sample_rows = 5
//! orientation = "long"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use fin_profile::ProfilerOptions;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    profiler: ProfilerOptions,
}

/// Parses profiler settings from TOML text.
pub fn parse_options(contents: &str) -> Result<ProfilerOptions, toml::de::Error> {
    toml::from_str::<ConfigFile>(contents).map(|file| file.profiler)
}

/// Loads profiler settings, falling back to defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<ProfilerOptions> {
    let Some(path) = path else {
        return Ok(ProfilerOptions::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let options =
        parse_options(&contents).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?options, "loaded profiler config");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fin_profile::Orientation;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_options("").unwrap(), ProfilerOptions::default());
    }

    #[test]
    fn test_partial_profiler_table() {
        let options = parse_options(
            r#"
            [profiler]
            sample_rows = 5
            orientation = "long"
            "#,
        )
        .unwrap();
        assert_eq!(options.sample_rows, 5);
        assert_eq!(options.sample_values, 5);
        assert_eq!(options.orientation, Some(Orientation::Long));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse_options("[profilr]\nsample_rows = 5\n").is_err());
    }

    #[test]
    fn test_bad_orientation_rejected() {
        assert!(parse_options("[profiler]\norientation = \"diagonal\"\n").is_err());
    }
}
