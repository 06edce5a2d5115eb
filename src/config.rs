use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub programs_dir: PathBuf,
    pub env_name: String,
}

impl Default for Config {
    fn default() -> Self {
        let env_name = env::var("BUGS_ENV").unwrap_or_else(|_| String::from("default"));
        let base_dir = if cfg!(windows) {
            PathBuf::from(env::var("USERPROFILE").unwrap_or_else(|_| String::from(".")))
        } else {
            PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from(".")))
        };

        let programs_dir = if let Ok(custom_dir) = env::var("BUGS_PROGRAMS_DIR") {
            PathBuf::from(custom_dir)
        } else {
            // Prefer a local programs directory when one exists
            let local_programs = Path::new("./programs");
            if local_programs.is_dir() {
                local_programs.to_path_buf()
            } else {
                base_dir.join(".bugs").join(&env_name).join("programs")
            }
        };

        Config {
            programs_dir,
            env_name,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let config = Config::default();
            config.save().unwrap_or_default();
            return config;
        }

        let mut contents = String::new();
        match fs::File::open(&config_path) {
            Ok(mut file) => {
                file.read_to_string(&mut contents).unwrap_or_default();
            }
            Err(_) => return Config::default(),
        }

        serde_json::from_str(&contents).unwrap_or_default()
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let env_name = env::var("BUGS_ENV").unwrap_or_else(|_| String::from("default"));
        let base_dir = if cfg!(windows) {
            PathBuf::from(env::var("USERPROFILE").unwrap_or_else(|_| String::from(".")))
        } else {
            PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from(".")))
        };
        base_dir.join(".bugs").join(&env_name).join("config.json")
    }
}
