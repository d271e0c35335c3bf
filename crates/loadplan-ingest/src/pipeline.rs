//! Per-file parse orchestration.
//!
//! The only ordering dependency in the whole pipeline lives here: the
//! schema is resolved once, before any row transform for that file. Rows
//! then flow through transform and filter independently. The result is a
//! single value carrying data and warnings together; with no
//! parser-instance state, repeated and concurrent invocations are safe by
//! construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use loadplan_model::{Order, SourceFile, StructuralError};
use loadplan_resolve::{ResolverConfig, SchemaResolution, resolve};
use loadplan_transform::{AliasTable, FieldIndex, TransformContext, is_data_row, transform_row};
use loadplan_validate::ValidationConfig;

/// The whole configuration surface of the core, as plain data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub resolver: ResolverConfig,
    pub aliases: AliasTable,
    pub validation: ValidationConfig,
    /// Injected "now" for date-year inference; today when unset.
    pub reference_date: Option<NaiveDate>,
}

impl PipelineConfig {
    #[must_use]
    pub fn reference(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// A recoverable per-row event recorded during the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based source row.
    pub row: usize,
    pub message: String,
}

/// Everything one file's parse produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub orders: Vec<Order>,
    pub warnings: Vec<ParseWarning>,
    pub resolution: SchemaResolution,
}

/// Parses one decoded source file into canonical orders.
///
/// Row-level failures never abort the file: they are recorded in the
/// returned warnings and processing continues. Only a structurally
/// unusable file (no rows, no header labels) errors out, and that aborts
/// this file alone.
pub fn parse_source(
    source: &SourceFile,
    config: &PipelineConfig,
) -> Result<ParseOutcome, StructuralError> {
    let resolution = resolve(source, &config.resolver)?;
    let fields = FieldIndex::build(&resolution, &config.aliases);
    let ctx = TransformContext::new(
        &fields,
        &resolution.columns,
        source.name.as_deref(),
        config.reference(),
    );

    let mut orders = Vec::new();
    let mut warnings = Vec::new();
    let mut dropped = 0usize;

    for (index, row) in source
        .rows
        .iter()
        .enumerate()
        .skip(resolution.first_data_row())
    {
        let row_number = index + 1;
        if row.is_blank() {
            continue;
        }
        match transform_row(row_number, row, &ctx) {
            Ok(order) => {
                if !is_data_row(&order) {
                    debug!(row = row_number, "non-data row dropped");
                    dropped += 1;
                    continue;
                }
                if order.quantity.is_none() {
                    warn!(
                        row = row_number,
                        po = order.po_number.as_str(),
                        "row kept with missing quantity"
                    );
                    warnings.push(ParseWarning {
                        row: row_number,
                        message: "quantity missing; row kept".to_string(),
                    });
                }
                orders.push(order);
            }
            Err(error) => {
                warnings.push(ParseWarning {
                    row: error.row,
                    message: error.to_string(),
                });
            }
        }
    }

    info!(
        file = source.display_name(),
        orders = orders.len(),
        dropped,
        warnings = warnings.len(),
        "source parsed"
    );

    Ok(ParseOutcome {
        orders,
        warnings,
        resolution,
    })
}
