//! Configuration file loading.

use anyhow::{Context, Result};
use std::path::Path;

use ytscript_catalog::TechniqueCatalog;
use ytscript_engine::EngineConfig;

/// Defaults, then the optional TOML file, then `YTSCRIPT_*` variables.
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str::<EngineConfig>(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        }
        None => EngineConfig::default(),
    };
    let config = config.with_env_overrides();
    config.validate().context("Invalid engine configuration")?;
    Ok(config)
}

/// The built-in catalog, or one exported earlier with `catalog export`.
pub fn load_catalog(path: Option<&Path>) -> Result<TechniqueCatalog> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
            TechniqueCatalog::from_json(&content)
                .with_context(|| format!("Failed to load catalog file: {:?}", path))
        }
        None => Ok(TechniqueCatalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use ytscript_models::StructureType;

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[storytelling]
narrative_structures = ["tutorial_step", "list_format"]

[generation]
max_script_length = 3000
"#
        )
        .unwrap();

        let config = load_engine_config(Some(file.path())).unwrap();
        assert_eq!(
            config.storytelling.narrative_structures,
            Some(vec![StructureType::TutorialStep, StructureType::ListFormat])
        );
        assert_eq!(config.generation.max_script_length, 3000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\nmin_script_length = 900\nmax_script_length = 100").unwrap();
        assert!(load_engine_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_engine_config(Some(Path::new("/nonexistent/ytscript.toml"))).is_err());
    }

    #[test]
    fn test_catalog_round_trips_through_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, TechniqueCatalog::builtin().to_json().unwrap()).unwrap();
        assert_eq!(load_catalog(Some(&path)).unwrap(), TechniqueCatalog::builtin());
    }
}
