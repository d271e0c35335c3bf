pub mod error;
pub mod fields;
pub mod findings;
pub mod order;
pub mod sentinel;
pub mod source;
pub mod stage;

pub use error::{Result, RowTransformError, StructuralError};
pub use findings::{Finding, RuleCode, Severity, SummaryStats, ValidationSummary};
pub use order::{Order, OrderStatus};
pub use source::{CellValue, RawRow, SourceFile};
pub use stage::{ColumnMap, Stage, StageBalances};
