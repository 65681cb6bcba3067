mod config;
pub use config::Config;

use chorm_core::{
    async_trait,
    driver::{
        operation::{Insert, QuerySql},
        Operation, Response,
    },
    stmt::Record,
    Driver, Error, Result,
};

use serde::Deserialize;

/// Driver for the ClickHouse HTTP interface.
///
/// Every operation is one `POST` to the server endpoint. Row-returning
/// statements are suffixed with `FORMAT JSON` and the `data` array of the
/// response is returned; inserts send newline-delimited JSON rows.
#[derive(Debug, Clone)]
pub struct ClickHouse {
    client: reqwest::Client,
    config: Config,
}

/// Body of a `FORMAT JSON` response. Only the rows are used.
#[derive(Debug, Deserialize)]
struct JsonOutput {
    data: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl ClickHouse {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Connects using a `http[s]://host[:port][/database]` URL.
    pub fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(Config::new(url)?))
    }

    /// Connects using `CLICKHOUSE_URL`, `CLICKHOUSE_USER` and
    /// `CLICKHOUSE_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn query_sql(&self, op: QuerySql) -> Result<Response> {
        if !op.returning {
            self.post(&[], op.sql).await?;
            return Ok(Response::ack());
        }

        let body = self.post(&[], format!("{} FORMAT JSON", op.sql)).await?;
        let output: JsonOutput = serde_json::from_str(&body).map_err(|err| {
            Error::store(anyhow::anyhow!("malformed JSON response: {err}"))
        })?;

        Ok(Response::values(
            output.data.into_iter().map(Record::from).collect::<Vec<_>>(),
        ))
    }

    async fn insert(&self, op: Insert) -> Result<Response> {
        let (query, body) = insert_request(op);

        self.post(
            &[
                ("query", query.as_str()),
                ("date_time_input_format", "best_effort"),
            ],
            body,
        )
        .await?;
        Ok(Response::ack())
    }

    /// Sends one request and returns the response body. Non-success statuses
    /// carry the server's error text.
    async fn post(&self, params: &[(&str, &str)], body: String) -> Result<String> {
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .query(&[("database", self.config.database.as_str())])
            .query(params)
            .header("X-ClickHouse-User", &self.config.user)
            .header("X-ClickHouse-Key", &self.config.password)
            .body(body)
            .send()
            .await
            .map_err(Error::store)?;

        let status = response.status();
        let text = response.text().await.map_err(Error::store)?;

        tracing::trace!(status = %status, bytes = text.len(), "clickhouse response");

        if !status.is_success() {
            return Err(Error::store(anyhow::anyhow!(
                "ClickHouse returned {status}: {}",
                text.trim()
            )));
        }

        Ok(text)
    }
}

/// Query and body of a bulk insert. Rows are newline-delimited JSON objects
/// whose values the server parses into the column types; instants arrive as
/// ISO-8601 text, hence the `best_effort` input format on the request.
fn insert_request(op: Insert) -> (String, String) {
    let query = format!("INSERT INTO {} FORMAT {}", op.table, op.format);

    let mut body = String::new();
    for row in op.rows {
        body.push_str(&serde_json::Value::Object(row).to_string());
        body.push('\n');
    }

    (query, body)
}

#[async_trait]
impl Driver for ClickHouse {
    async fn exec(&self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query_sql(op).await,
            Operation::Insert(op) => self.insert(op).await,
        }
    }
}
