use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub event_bus_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("DG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("Invalid DG_LISTEN_ADDR")?;
        let cors_allow = std::env::var("DG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("DG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let event_bus_capacity: usize = std::env::var("DG_EVENT_BUS_CAPACITY")
            .unwrap_or_else(|_| "256".into())
            .parse()
            .unwrap_or(256)
            .max(1);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            event_bus_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 4] = [
        "DG_LISTEN_ADDR",
        "DG_CORS_ALLOW_ORIGINS",
        "DG_REQUEST_TIMEOUT_MS",
        "DG_EVENT_BUS_CAPACITY",
    ];

    fn cleanup_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_bind_port_8000() {
        cleanup_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.event_bus_capacity, 256);
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        cleanup_env();
        std::env::set_var("DG_LISTEN_ADDR", "127.0.0.1:9100");
        std::env::set_var("DG_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,");
        std::env::set_var("DG_REQUEST_TIMEOUT_MS", "not-a-number");

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9100".parse().unwrap());
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout, Duration::from_millis(30000));
        cleanup_env();
    }

    #[test]
    #[serial]
    fn rejects_bad_listen_addr() {
        cleanup_env();
        std::env::set_var("DG_LISTEN_ADDR", "nowhere");
        assert!(Config::from_env().is_err());
        cleanup_env();
    }
}
