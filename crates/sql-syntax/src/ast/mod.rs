pub mod column;
pub mod constraint;
pub mod create_table;
pub mod data_type;
pub mod expr;
pub mod ident;
pub mod literal;
pub mod operator;
pub mod partition;
pub mod select;
pub mod span;
pub mod supplemental;
