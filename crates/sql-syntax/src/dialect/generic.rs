use crate::dialect::{DbType, Dialect};

/// Baseline grammar: every hook keeps its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn db_type(&self) -> DbType {
        DbType::Generic
    }
}
