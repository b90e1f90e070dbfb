use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Unable to read configuration file: {0}")]
    Read(#[from] io::Error),

    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub listen_address: IpAddr,
    pub port: u16
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            listen_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000
        }
    }
}

impl Configuration {
    /// Reads the configuration file at `path`. A missing file is not an error,
    /// the defaults are used instead.
    pub async fn load(path: &Path) -> Result<Self, ConfigurationError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into())
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.listen_address, self.port)
    }
}
