use crate::models::palette::{ColorStrategy, Palette, PaletteColor, default_colors};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default)]
    pub color_strategy: ColorStrategy,
    #[serde(default = "default_colors")]
    pub palette: Vec<PaletteColor>,
    #[serde(default = "default_max_label_length")]
    pub max_label_length: usize,
}

fn default_max_label_length() -> usize {
    32
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            color_strategy: ColorStrategy::default(),
            palette: default_colors(),
            max_label_length: default_max_label_length(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtally")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtally.conf")
    }

    /// Return the full path of the JSON store document
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("rtally.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and replaced with defaults rather than
    /// aborting the whole command.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                eprintln!("⚠️  Failed to parse configuration file ({e}), using defaults");
                Self::default()
            }),
            Err(e) => {
                eprintln!("⚠️  Failed to read configuration file ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// The palette with its selection strategy, as configured.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone(), self.color_strategy)
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rtally.json")
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(store_path)
    }
}
