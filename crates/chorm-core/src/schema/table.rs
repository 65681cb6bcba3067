use indexmap::IndexMap;

use std::fmt;

/// Storage options for a model's table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableOptions {
    pub engine: Engine,

    /// Ordering key; the physical sort order of the table
    pub order_by: Vec<String>,

    /// Partition key expressions. Empty means unpartitioned.
    pub partition_by: Vec<String>,

    /// Primary key, when it differs from the ordering key
    pub primary_key: Vec<String>,

    /// Sampling key expression
    pub sample_by: Option<String>,

    /// Table-level settings, emitted in declaration order
    pub settings: IndexMap<String, SettingValue>,

    pub comment: Option<String>,

    /// Table name, when it differs from the model name
    pub table_name: Option<String>,
}

/// Table engine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Engine {
    #[default]
    MergeTree,
    ReplacingMergeTree,
    SummingMergeTree,
    AggregatingMergeTree,
    Memory,
    Log,
    TinyLog,
    StripeLog,
    Null,

    /// Engine clause rendered verbatim, for engines that take arguments,
    /// e.g. `CollapsingMergeTree(sign)`
    Custom(String),
}

/// Value of a table setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn order_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn partition_by<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_by = exprs.into_iter().map(Into::into).collect();
        self
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn sample_by(mut self, expr: impl Into<String>) -> Self {
        self.sample_by = Some(expr.into());
        self
    }

    pub fn setting(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(name.into(), value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }
}

impl Engine {
    fn is_merge_tree(&self) -> bool {
        matches!(
            self,
            Engine::MergeTree
                | Engine::ReplacingMergeTree
                | Engine::SummingMergeTree
                | Engine::AggregatingMergeTree
        )
    }

    fn name(&self) -> &str {
        match self {
            Engine::MergeTree => "MergeTree",
            Engine::ReplacingMergeTree => "ReplacingMergeTree",
            Engine::SummingMergeTree => "SummingMergeTree",
            Engine::AggregatingMergeTree => "AggregatingMergeTree",
            Engine::Memory => "Memory",
            Engine::Log => "Log",
            Engine::TinyLog => "TinyLog",
            Engine::StripeLog => "StripeLog",
            Engine::Null => "Null",
            Engine::Custom(clause) => clause,
        }
    }
}

/// Renders the engine as it appears after `ENGINE = `. MergeTree-family
/// engines get an empty argument list.
impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_merge_tree() {
            write!(f, "{}()", self.name())
        } else {
            f.write_str(self.name())
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(value as i64)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        SettingValue::Int(value as i64)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}
