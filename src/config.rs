use std::env;
use std::fs;
use std::path::PathBuf;

use dirs_next::config_dir;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize, Serialize)]
pub struct MedibotConfig {
    #[serde(default = "default_medibot_port")]
    pub medibot_port: Option<u16>,
}

fn default_medibot_port() -> Option<u16> {
    Some(5000)
}

impl Default for MedibotConfig {
    fn default() -> Self {
        MedibotConfig {
            medibot_port: default_medibot_port(),
        }
    }
}

static CONFIG: OnceCell<MedibotConfig> = OnceCell::new();

fn get_medibot_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| env::current_dir().unwrap_or_default());
    path.push("medibot");
    path.push("medibot.toml");
    path
}

fn load_config_file() -> MedibotConfig {
    let path = get_medibot_config_path();
    info!("Loading config from {}", path.display());
    if path.exists() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        // Create the directory and file, and write defaults
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let default = MedibotConfig::default();
        let toml_str = toml::to_string_pretty(&default).unwrap_or_default();
        let _ = fs::write(&path, toml_str);
        default
    }
}

fn get_config() -> &'static MedibotConfig {
    CONFIG.get_or_init(load_config_file)
}

pub fn get_medibot_port() -> u16 {
    get_config()
        .medibot_port
        .or_else(|| env::var("MEDIBOT_PORT").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(5000)
}
