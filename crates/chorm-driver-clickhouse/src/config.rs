use chorm_core::{Error, Result};

use percent_encoding::percent_decode_str;
use url::Url;

const DEFAULT_URL: &str = "http://localhost:8123/default";
const DEFAULT_USER: &str = "default";
const DEFAULT_DATABASE: &str = "default";

/// Connection settings for the ClickHouse HTTP interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server endpoint, without the database path
    pub endpoint: Url,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    /// Parses a URL of the form `http[s]://host[:port][/database]`. Missing
    /// parts fall back to the `default` user and database.
    pub fn new(url: &str) -> Result<Config> {
        let mut endpoint = Url::parse(url)
            .map_err(|err| Error::config(format!("invalid ClickHouse URL `{url}`: {err}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "ClickHouse URL `{url}` must use the http or https scheme"
            )));
        }

        let database = match endpoint.path().trim_matches('/') {
            "" => DEFAULT_DATABASE.to_string(),
            database => database.to_string(),
        };

        let user = match endpoint.username() {
            "" => DEFAULT_USER.to_string(),
            user => decode(user, url)?,
        };
        let password = decode(endpoint.password().unwrap_or_default(), url)?;

        endpoint.set_path("/");
        // Credentials travel in headers
        let _ = endpoint.set_username("");
        let _ = endpoint.set_password(None);

        Ok(Config {
            endpoint,
            user,
            password,
            database,
        })
    }

    /// Reads `CLICKHOUSE_URL`, `CLICKHOUSE_USER` and `CLICKHOUSE_PASSWORD`.
    /// Unset variables take their defaults; the variables override
    /// credentials embedded in the URL.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let url = lookup("CLICKHOUSE_URL").unwrap_or_else(|| DEFAULT_URL.to_string());
        let mut config = Config::new(&url)?;

        if let Some(user) = lookup("CLICKHOUSE_USER") {
            config.user = user;
        }

        if let Some(password) = lookup("CLICKHOUSE_PASSWORD") {
            config.password = password;
        }

        Ok(config)
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

/// URL userinfo is percent-encoded; headers carry the plain text.
fn decode(component: &str, url: &str) -> Result<String> {
    percent_decode_str(component)
        .decode_utf8()
        .map(|text| text.into_owned())
        .map_err(|err| Error::config(format!("invalid credentials in ClickHouse URL `{url}`: {err}")))
}
