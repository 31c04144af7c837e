//! Connection descriptor for the recordings database
//!
//! Credentials come from the environment (`DBUSER`, `DBPASS`). Network
//! parameters default to a local server and can be overridden by the caller.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};

use crate::error::{AlbumError, Result};

/// Environment variable holding the database user
pub const ENV_USER: &str = "DBUSER";
/// Environment variable holding the database password
pub const ENV_PASSWORD: &str = "DBPASS";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "recordings";

/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Matches the driver's own acquire timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to open a pool against the album database.
#[derive(Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Permit `mysql_native_password` negotiation.
    pub allow_native_passwords: bool,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Build a config with the given credentials and default network settings.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            allow_native_passwords: true,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AlbumError::MissingEnv`] when `DBUSER` or `DBPASS` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup(ENV_USER).ok_or(AlbumError::MissingEnv { var: ENV_USER })?;
        let password = lookup(ENV_PASSWORD).ok_or(AlbumError::MissingEnv { var: ENV_PASSWORD })?;

        let config = Self::new(user, password);
        config.validate()?;
        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Check the descriptor before any connection is attempted.
    ///
    /// An empty password is accepted; an empty user is not.
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(AlbumError::config(format!("{ENV_USER} is set but empty")));
        }
        if self.host.trim().is_empty() {
            return Err(AlbumError::config("host must not be empty"));
        }
        if self.port == 0 {
            return Err(AlbumError::config("port must be non-zero"));
        }
        if self.database.trim().is_empty() {
            return Err(AlbumError::config("database name must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(AlbumError::config("max_connections must be at least 1"));
        }
        // sqlx always offers mysql_native_password; it cannot be switched off.
        if !self.allow_native_passwords {
            return Err(AlbumError::config(
                "native password negotiation cannot be disabled with this driver",
            ));
        }
        Ok(())
    }

    /// Driver options for this descriptor. TLS is not configured.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(MySqlSslMode::Disabled)
    }

    /// Connection URL with the password masked, for logs and error messages.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("allow_native_passwords", &self.allow_native_passwords)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
