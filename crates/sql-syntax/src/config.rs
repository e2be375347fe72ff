use crate::dialect::DbType;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional lexer/parser behaviors, read through the token cursor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ParserFeatures: u32 {
        /// Keep comments that precede a statement in `before_comments`.
        const KEEP_COMMENTS = 0b0001;
        /// Treat `AS $placeholder` as a deferred template query.
        const TEMPLATE      = 0b0010;
    }
}

impl Default for ParserFeatures {
    fn default() -> Self {
        ParserFeatures::empty()
    }
}

/// Parser settings that can be loaded from a JSON file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub dialect: DbType,
    pub features: ParserFeatures,
}

impl ParserConfig {
    pub fn new(dialect: DbType) -> Self {
        Self {
            dialect,
            features: ParserFeatures::empty(),
        }
    }

    pub fn with_features(mut self, features: ParserFeatures) -> Self {
        self.features |= features;
        self
    }
}
