use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Route answering with the timestamp refreshed at request time.
    pub status_path: String,
    /// Route answering with the timestamp of the last update.
    pub background_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            status_path: "/status".into(),
            background_path: "/status/background".into(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Rejects paths the router would refuse to mount. Status routes are
    /// plain literals, so any capture or wildcard syntax is refused.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.status_path, &self.background_path] {
            if !path.starts_with('/') {
                return Err(Error::InvalidPath {
                    path: path.clone(),
                    reason: "must start with '/'",
                });
            }
            if path.contains(['{', '}']) {
                return Err(Error::InvalidPath {
                    path: path.clone(),
                    reason: "captures are not allowed",
                });
            }
            if path.split('/').any(|segment| segment.starts_with([':', '*'])) {
                return Err(Error::InvalidPath {
                    path: path.clone(),
                    reason: "segments must not start with ':' or '*'",
                });
            }
        }
        if self.status_path == self.background_path {
            return Err(Error::InvalidPath {
                path: self.background_path.clone(),
                reason: "status and background routes must differ",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_relative_path() {
        let config = ServerConfig {
            status_path: "status".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPath { path, .. }) if path == "status"
        ));
    }

    #[test]
    fn rejects_capture_syntax() {
        for path in ["/status/{", "/status/}", "/a/{id}", "/a/{*rest}"] {
            let config = ServerConfig {
                status_path: path.into(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidPath { .. })),
                "{path} accepted"
            );
        }
    }

    #[test]
    fn rejects_legacy_capture_segments() {
        for path in ["/status/:id", "/status/*rest"] {
            let config = ServerConfig {
                background_path: path.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{path} accepted");
        }
    }

    #[test]
    fn validated_paths_mount_cleanly() {
        let config = ServerConfig {
            status_path: "/healthz".into(),
            background_path: "/healthz/worker".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let _router = crate::build_router(crate::StatusHolder::new(), &config);
    }

    #[test]
    fn rejects_identical_paths() {
        let config = ServerConfig {
            background_path: "/status".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
