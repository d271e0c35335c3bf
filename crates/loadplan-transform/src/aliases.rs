//! Canonical field names and the legacy-label alias table.
//!
//! The four factory layouts never agreed on column wording, so every
//! canonical field carries a priority-ordered list of source labels. The
//! table is plain data: consumers can extend or replace it without touching
//! the transformer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use loadplan_model::fields;

/// Canonical field -> source labels, tried in order; first present wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl AliasTable {
    /// An empty table; use [`AliasTable::default`] for the built-in labels.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Replaces the label list for a canonical field.
    pub fn set(&mut self, field: impl Into<String>, labels: &[&str]) {
        self.entries.insert(
            field.into(),
            labels.iter().map(|label| (*label).to_string()).collect(),
        );
    }

    /// Source labels for a field, primary first.
    pub fn labels(&self, field: &str) -> &[String] {
        self.entries.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All configured canonical fields, in stable order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.set(fields::PO_NUMBER, &[
            "PO No",
            "PO",
            "PO Number",
            "Order No",
            "SETP",
            "Sales Order",
        ]);
        table.set(fields::STYLE, &["Style", "Style No", "Article"]);
        table.set(fields::MODEL, &["Model"]);
        table.set(fields::COLOR, &["Color", "Colour"]);
        table.set(fields::QUANTITY, &["Qty", "Q.ty", "Quantity", "Order Qty"]);
        table.set(fields::CRD, &["CRD", "Customer Required Date"]);
        table.set(fields::SDD_ORIGINAL, &["SDD Original", "SDD", "Original", "Ship Date"]);
        table.set(fields::SDD_CURRENT, &["SDD Current", "Current"]);
        table.set(fields::DESTINATION, &["Destination", "Dest"]);
        table.set(fields::FACTORY, &["Factory", "Unit"]);
        table.set(fields::VENDOR, &["Vendor", "Outsole Vendor", "OSC Vendor"]);
        table.set(fields::BUYER, &["Buyer", "Coop", "Co-op"]);
        table.set(fields::APPROVED, &["AQL", "Intertek"]);
        table
    }
}
