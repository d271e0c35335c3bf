//! Canonical field names.
//!
//! These are the stable identifiers used by the alias table, the
//! required-field validation list, and finding references.

pub const PO_NUMBER: &str = "po_number";
pub const STYLE: &str = "style";
pub const MODEL: &str = "model";
pub const COLOR: &str = "color";
pub const QUANTITY: &str = "quantity";
pub const CRD: &str = "crd";
pub const SDD_ORIGINAL: &str = "sdd_original";
pub const SDD_CURRENT: &str = "sdd_current";
pub const DESTINATION: &str = "destination";
pub const FACTORY: &str = "factory";
pub const VENDOR: &str = "vendor";
pub const BUYER: &str = "buyer";
pub const APPROVED: &str = "approved";
