use crate::ast::{
    ident::{Identifier, display_separated},
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Oracle table-level `SUPPLEMENTAL LOG ...` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementalLogging {
    pub kind: SupplementalLoggingKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SupplementalLoggingKind {
    /// `SUPPLEMENTAL LOG DATA (ALL, PRIMARY KEY, ...) COLUMNS`
    Data(Vec<SupplementalLogData>),
    /// `SUPPLEMENTAL LOG GROUP name (col, ...) [ALWAYS]`
    Group {
        name: Identifier,
        columns: Vec<Identifier>,
        always: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplementalLogData {
    All,
    PrimaryKey,
    Unique,
    ForeignKey,
}

impl fmt::Display for SupplementalLogData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplementalLogData::All => write!(f, "ALL"),
            SupplementalLogData::PrimaryKey => write!(f, "PRIMARY KEY"),
            SupplementalLogData::Unique => write!(f, "UNIQUE"),
            SupplementalLogData::ForeignKey => write!(f, "FOREIGN KEY"),
        }
    }
}

impl fmt::Display for SupplementalLogging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SupplementalLoggingKind::Data(data) => write!(
                f,
                "SUPPLEMENTAL LOG DATA ({}) COLUMNS",
                display_separated(data, ", ")
            ),
            SupplementalLoggingKind::Group {
                name,
                columns,
                always,
            } => {
                write!(
                    f,
                    "SUPPLEMENTAL LOG GROUP {} ({})",
                    name,
                    display_separated(columns, ", ")
                )?;
                if *always {
                    write!(f, " ALWAYS")?;
                }
                Ok(())
            }
        }
    }
}
