//! Row transformation: raw loadplan rows into canonical orders.

pub mod aliases;
pub mod factory;
pub mod field_index;
pub mod filter;
pub mod normalization;
pub mod transformer;

pub use aliases::{AliasTable, fields};
pub use field_index::FieldIndex;
pub use filter::is_data_row;
pub use transformer::{TransformContext, transform_row};
