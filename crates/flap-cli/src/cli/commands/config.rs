//! Config command handlers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use flap_core::config::{Config, default_config_template, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

pub fn show(config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config).context("serialize config")?;
    print!("{toml}");
    Ok(())
}

pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("config already exists at {}", config_path.display());
    }
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir at {}", parent.display()))?;
    }
    fs::write(config_path, default_config_template())
        .with_context(|| format!("write config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_writes_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("step_ms"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "# existing config").unwrap();

        let err = init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
