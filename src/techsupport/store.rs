use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{format_err, Context, Result};
use log::info;

use super::config::Config;

pub fn data_dir() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "techsupport", "techsupport")
        .ok_or_else(|| format_err!("Cannot retrieve project dirs"))?;
    Ok(project_dirs.data_dir().to_owned())
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.yaml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    info!("Config file: {}", path.to_string_lossy());
    if !path.exists() {
        info!("Config file does not exist, creating.");
        store_default_config(path)?;
    }
    let config_file =
        File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    serde_yaml::from_reader(config_file)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn store_default_config(path: &Path) -> Result<()> {
    ensure_dir_created(path)?;
    let config_file = File::create(path)?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
