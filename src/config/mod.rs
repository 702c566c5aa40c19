use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod session;
pub mod workspace;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config, session and workspace files.
    /// Resolved at startup (global `--conf`, `EFFORTTRACK_CONF`, or the
    /// platform default).
    #[serde(skip)]
    pub dir: PathBuf,
    pub base_url: String,
    pub email: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn default_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")));
            appdata.join("efforttrack")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
            home.join(".efforttrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file(dir: &Path) -> PathBuf {
        dir.join("efforttrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(dir: &Path) -> Self {
        let path = Self::config_file(dir);

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            let mut cfg: Config =
                serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file");
            cfg.dir = dir.to_path_buf();
            cfg
        } else {
            Config {
                dir: dir.to_path_buf(),
                base_url: default_base_url(),
                email: String::new(),
                timeout_secs: default_timeout_secs(),
            }
        }
    }

    /// Write the configuration back to its file
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let yaml = serde_yaml::to_string(&self).unwrap();
        let mut file = fs::File::create(Self::config_file(&self.dir))?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration directory with default files
    pub fn init_all(dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;

        let config = Config {
            dir: dir.to_path_buf(),
            base_url: default_base_url(),
            email: String::new(),
            timeout_secs: default_timeout_secs(),
        };
        config.save()?;
        println!("✅ Config file:    {:?}", Self::config_file(dir));

        // Empty workspace (weekly range anchored to today, one blank row)
        let ws = workspace::Workspace::new(crate::core::daterange::today());
        if let Err(e) = ws.save(dir) {
            return Err(io::Error::other(e.to_string()));
        }
        println!("✅ Workspace file: {:?}", workspace::Workspace::file(dir));

        Ok(())
    }
}
