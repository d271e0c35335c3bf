//! Subcommand implementations.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use tracing::error;

use loadplan_ingest::{PipelineConfig, parse_source, read_csv_source};
use loadplan_model::{Order, OrderStatus, ValidationSummary};
use loadplan_stats::{Rollups, StatsConfig, aggregate, is_delayed};
use loadplan_validate::validate;

use crate::cli::{ExportArgs, ParseArgs, StatsArgs, ValidateArgs};

/// Per-file outcome for the summary table.
pub struct FileReport {
    pub file: String,
    pub orders: usize,
    pub warnings: usize,
    pub error: Option<String>,
}

pub struct LoadResult {
    pub orders: Vec<Order>,
    pub reports: Vec<FileReport>,
}

pub struct ParseResult {
    pub loaded: LoadResult,
    pub out: Option<PathBuf>,
}

pub struct ValidateResult {
    pub loaded: LoadResult,
    pub summary: ValidationSummary,
}

pub struct StatsResult {
    pub loaded: LoadResult,
    pub rollups: Rollups,
}

pub struct ExportResult {
    pub loaded: LoadResult,
    pub out: PathBuf,
}

pub fn run_parse(args: &ParseArgs) -> anyhow::Result<ParseResult> {
    let config = pipeline_config(args.reference_date, None);
    let loaded = load_orders(&args.files, &config);
    if let Some(out) = &args.out {
        let file = File::create(out)
            .with_context(|| format!("cannot create {}", out.display()))?;
        serde_json::to_writer_pretty(file, &loaded.orders)?;
    }
    Ok(ParseResult {
        loaded,
        out: args.out.clone(),
    })
}

pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidateResult> {
    let config = pipeline_config(args.reference_date, args.required.as_deref());
    let loaded = load_orders(&args.files, &config);
    let summary = validate(&loaded.orders, &config.validation);
    Ok(ValidateResult { loaded, summary })
}

pub fn run_stats(args: &StatsArgs) -> anyhow::Result<StatsResult> {
    let config = pipeline_config(args.reference_date, None);
    let loaded = load_orders(&args.files, &config);
    let stats_config = StatsConfig {
        reference_date: args.reference_date,
        ..StatsConfig::default()
    };
    let rollups = aggregate(&loaded.orders, &stats_config);
    Ok(StatsResult { loaded, rollups })
}

pub fn run_export(args: &ExportArgs) -> anyhow::Result<ExportResult> {
    let config = pipeline_config(args.reference_date, None);
    let loaded = load_orders(&args.files, &config);
    write_consolidated_csv(&args.out, &loaded.orders, config.reference())?;
    Ok(ExportResult {
        loaded,
        out: args.out.clone(),
    })
}

fn pipeline_config(reference: Option<NaiveDate>, required: Option<&str>) -> PipelineConfig {
    let mut config = PipelineConfig {
        reference_date: reference,
        ..PipelineConfig::default()
    };
    config.validation.reference_date = reference;
    if let Some(list) = required {
        let fields: Vec<String> = list
            .split(',')
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();
        if !fields.is_empty() {
            config.validation.required_fields = fields;
        }
    }
    config
}

/// Decodes and parses every file; a structurally unusable file is reported
/// and skipped, never fatal for the batch.
fn load_orders(files: &[PathBuf], config: &PipelineConfig) -> LoadResult {
    let mut orders = Vec::new();
    let mut reports = Vec::new();

    for path in files {
        let file_label = path.display().to_string();
        let source = match read_csv_source(path) {
            Ok(source) => source,
            Err(err) => {
                error!(file = file_label.as_str(), "decode failed: {err}");
                reports.push(FileReport {
                    file: file_label,
                    orders: 0,
                    warnings: 0,
                    error: Some(err.to_string()),
                });
                continue;
            }
        };
        match parse_source(&source, config) {
            Ok(outcome) => {
                reports.push(FileReport {
                    file: file_label,
                    orders: outcome.orders.len(),
                    warnings: outcome.warnings.len(),
                    error: None,
                });
                orders.extend(outcome.orders);
            }
            Err(err) => {
                error!(file = file_label.as_str(), "parse aborted: {err}");
                reports.push(FileReport {
                    file: file_label,
                    orders: 0,
                    warnings: 0,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    LoadResult { orders, reports }
}

const EXPORT_COLUMNS: [&str; 23] = [
    "Factory",
    "PO Number",
    "Model",
    "Style",
    "Color",
    "Destination",
    "Buyer",
    "Vendor",
    "Quantity",
    "CRD",
    "SDD",
    "Month",
    "Approved",
    "S_CUT",
    "PRE_SEW",
    "SEW_INPUT",
    "SEW_BAL",
    "S_FIT",
    "ASS_BAL",
    "WH_IN",
    "WH_OUT",
    "Status",
    "Delayed",
];

/// Consolidated flat sheet of the canonical orders.
fn write_consolidated_csv(
    out: &Path,
    orders: &[Order],
    reference: NaiveDate,
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("cannot create {}", out.display()))?;
    writer.write_record(EXPORT_COLUMNS)?;
    for order in orders {
        let mut record: Vec<String> = vec![
            order.factory.clone(),
            order.po_number.clone(),
            order.model.clone(),
            order.style.clone(),
            order.color.clone(),
            order.destination.clone(),
            order.buyer.clone(),
            order.vendor.clone(),
            order
                .quantity
                .map(|quantity| quantity.to_string())
                .unwrap_or_default(),
            date_field(order.crd),
            date_field(order.effective_sdd()),
            order.year_month.clone().unwrap_or_default(),
            yes_no(order.approved),
        ];
        for (_, cleared) in order.stages.iter() {
            record.push(cleared.to_string());
        }
        record.push(status_label(order.status).to_string());
        record.push(yes_no(is_delayed(order, reference)));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "completed",
        OrderStatus::Partial => "partial",
        OrderStatus::Pending => "pending",
    }
}
