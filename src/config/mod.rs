use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Which backing store holds the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One CSV table per period under `data_dir/tables`.
    File,
    /// One unpartitioned SQLite ledger (remote-sheet style deployments).
    Sqlite,
}

/// What to do when an existing table file carries a different column
/// set than the current schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMismatchPolicy {
    /// Fail the operation with a SchemaMismatch error.
    Reject,
    /// Map known columns by name, default the missing ones.
    Coerce,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage")]
    pub storage: StorageBackend,
    pub data_dir: String,
    pub database: String,
    #[serde(default = "default_schema_policy")]
    pub on_schema_mismatch: SchemaMismatchPolicy,
}

fn default_storage() -> StorageBackend {
    StorageBackend::File
}

fn default_schema_policy() -> SchemaMismatchPolicy {
    SchemaMismatchPolicy::Reject
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            database: Self::database_file().to_string_lossy().to_string(),
            on_schema_mismatch: default_schema_policy(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("expenselog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".expenselog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("expenselog.conf")
    }

    /// Default root for tables and receipts
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Return the full path of the SQLite ledger database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("expenselog.sqlite")
    }

    pub fn tables_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("tables")
    }

    pub fn receipts_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("receipts")
    }

    /// Apply a command-line data-dir override. The sqlite ledger moves
    /// with it so the override is complete for either backend.
    pub fn override_data_dir(&mut self, dir: &str) {
        self.data_dir = dir.to_string();
        self.database = PathBuf::from(dir)
            .join("expenselog.sqlite")
            .to_string_lossy()
            .to_string();
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and data directories
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data dir: user provided or default
        let is_custom = custom_data_dir.is_some();
        let data_dir = if let Some(name) = custom_data_dir {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_default()
        };

        // A custom data dir carries the sqlite ledger with it
        let database = if is_custom {
            data_dir.join("expenselog.sqlite")
        } else {
            Self::database_file()
        };

        let config = Config {
            storage: default_storage(),
            data_dir: data_dir.to_string_lossy().to_string(),
            database: database.to_string_lossy().to_string(),
            on_schema_mismatch: default_schema_policy(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create data directories
        fs::create_dir_all(config.tables_dir())?;
        fs::create_dir_all(config.receipts_dir())?;

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(())
    }
}
