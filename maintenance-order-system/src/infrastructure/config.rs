use serde::Deserialize;

#[derive(Default, Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub document_storage: DocumentStorageConfig,
}

#[derive(Clone, Deserialize, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_bind_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub port: u16,
}

impl HostConfig {
    fn default_bind_address() -> String {
        "0.0.0.0".to_string()
    }
    fn default_port() -> u16 {
        8080
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            port: Self::default_port(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "postgres://localhost/maintenance_orders".to_string()
    }
    fn default_max_connections() -> u32 {
        10
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            max_connections: Self::default_max_connections(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct DocumentStorageConfig {
    #[serde(default = "DocumentStorageConfig::default_root")]
    pub root: String,
    /// Upload size cap in bytes.
    #[serde(default = "DocumentStorageConfig::default_max_size")]
    pub max_size: usize,
}

impl DocumentStorageConfig {
    fn default_root() -> String {
        "./data/reference-documents".to_string()
    }
    fn default_max_size() -> usize {
        20 * 1024 * 1024
    }
}

impl Default for DocumentStorageConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            max_size: Self::default_max_size(),
        }
    }
}

pub fn build_config() -> anyhow::Result<AppConfig> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("MOS").separator("__"))
        .build()?;
    Ok(config.try_deserialize()?)
}
