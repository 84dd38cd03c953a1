//! Server configuration loaded via OrthoConfig.
//!
//! Values layer defaults, configuration files, `ROSTER_*` environment
//! variables and command-line flags, later layers winning.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_MIN_IDLE: u32 = 2;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Runtime settings for the roster server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Connections kept open while idle.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Seconds a single unit of work may run before it is aborted.
    pub request_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Listener address, `0.0.0.0:8080` unless configured.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Deadline applied to each unit of work.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Whether to apply pending migrations at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }

    /// Pool configuration for `database_url`, or `None` when no URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
                .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)))
                .with_connection_timeout(Duration::from_secs(
                    self.pool_connection_timeout_secs
                        .unwrap_or(DEFAULT_POOL_CONNECTION_TIMEOUT_SECS),
                )),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "ROSTER_DATABASE_URL",
        "ROSTER_BIND_ADDR",
        "ROSTER_POOL_MAX_SIZE",
        "ROSTER_POOL_MIN_IDLE",
        "ROSTER_POOL_CONNECTION_TIMEOUT_SECS",
        "ROSTER_REQUEST_TIMEOUT_SECS",
        "ROSTER_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("roster")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert!(settings.database_url().is_none());
        assert!(settings.pool_config().is_none());
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(settings.run_migrations());
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    fn migrations_run_unless_disabled(#[case] raw: Option<&str>, #[case] expected: bool) {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "ROSTER_RUN_MIGRATIONS")
                .then(|| raw.map(str::to_owned))
                .flatten();
            (name, value)
        }));

        assert_eq!(load_from_empty_args().run_migrations(), expected);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_DATABASE_URL", Some("postgres://db/roster".to_owned())),
            ("ROSTER_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("ROSTER_POOL_MAX_SIZE", Some("4".to_owned())),
            ("ROSTER_POOL_MIN_IDLE", Some("1".to_owned())),
            ("ROSTER_POOL_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
            ("ROSTER_REQUEST_TIMEOUT_SECS", Some("2".to_owned())),
            ("ROSTER_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let pool = settings.pool_config().expect("pool config");

        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(2));
        assert!(!settings.run_migrations());
        assert_eq!(pool.database_url(), "postgres://db/roster");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.min_idle(), Some(1));
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }
}
