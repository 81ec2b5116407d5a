use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::generator::GenerateOptions;

/// Reads generation options from a YAML file. Missing keys keep their
/// defaults; unknown keys are rejected.
pub fn load_options(path: &Path) -> Result<GenerateOptions> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read options {}", path.display()))?;
    let options = parse_options(&contents).map_err(|error| {
        let location = error
            .location()
            .map(|location| format!("line {}, column {}", location.line(), location.column()))
            .unwrap_or_else(|| "unknown location".to_owned());
        anyhow!(
            "failed to parse yaml in {} at {}: {}",
            path.display(),
            location,
            error
        )
    })?;

    options
        .validated_scale()
        .with_context(|| format!("invalid options in {}", path.display()))?;
    Ok(options)
}

fn parse_options(contents: &str) -> std::result::Result<GenerateOptions, serde_yaml::Error> {
    // an empty document means "all defaults"
    if contents.trim().is_empty() {
        return Ok(GenerateOptions::default());
    }
    serde_yaml::from_str(contents)
}
