use crate::ast::ident::display_separated;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column type as written, e.g. `VARCHAR(255)`, `NUMERIC(10, 2)`,
/// `TIMESTAMP(3) WITH TIME ZONE`, `INT UNSIGNED`, `INT[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataType {
    /// Upper-cased type name; multi-word names are joined with one space.
    pub name: String,
    pub args: Vec<String>,
    /// Words written after the arguments (`WITH TIME ZONE`, `UNSIGNED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub array: bool,
}

impl DataType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            args: Vec::new(),
            suffix: None,
            array: false,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "({})", display_separated(&self.args, ", "))?;
        }
        if let Some(suffix) = &self.suffix {
            write!(f, " {}", suffix)?;
        }
        if self.array {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
