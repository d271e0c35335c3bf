//! Column schema resolution for heterogeneous loadplan layouts.

pub mod engine;
pub mod types;
pub mod utils;

pub use engine::resolve;
pub use types::{ResolverConfig, SchemaResolution, StagePattern, default_stage_patterns};
pub use utils::normalize_text;
