//! Terminal summaries rendered with `comfy-table`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use loadplan_model::{Severity, ValidationSummary};
use loadplan_stats::{GroupStats, Rollups};

use crate::commands::FileReport;

pub fn print_file_table(reports: &[FileReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Orders"),
        header_cell("Warnings"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut total_orders = 0usize;
    let mut total_warnings = 0usize;
    for report in reports {
        total_orders += report.orders;
        total_warnings += report.warnings;
        let status = match &report.error {
            Some(error) => Cell::new(error).fg(Color::Red),
            None => Cell::new("ok").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&report.file),
            Cell::new(report.orders),
            count_cell(report.warnings, Color::Yellow),
            status,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_orders).add_attribute(Attribute::Bold),
        count_cell(total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_validation(summary: &ValidationSummary) {
    println!(
        "Rows: {}  critical: {}  warning: {}  info: {}  error rate: {:.1}%",
        summary.stats.rows,
        summary.stats.critical,
        summary.stats.warning,
        summary.stats.info,
        summary.error_rate * 100.0
    );
    println!(
        "Dataset: {}",
        if summary.is_valid { "VALID" } else { "INVALID" }
    );

    if summary.findings.is_empty() {
        return;
    }

    let mut findings: Vec<_> = summary.findings.iter().collect();
    findings.sort_by(|a, b| {
        let severity = b.severity.cmp(&a.severity);
        if severity != Ordering::Equal {
            return severity;
        }
        let row = a.row.cmp(&b.row);
        if row != Ordering::Equal {
            return row;
        }
        a.field.cmp(&b.field)
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for finding in findings {
        table.add_row(vec![
            Cell::new(finding.row),
            severity_cell(finding.severity),
            Cell::new(&finding.field),
            Cell::new(finding.code.as_str()),
            Cell::new(&finding.message),
            match &finding.value {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            },
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn print_rollups(rollups: &Rollups) {
    let totals = &rollups.totals;
    println!(
        "Orders: {}  quantity: {}  completed: {}  completion: {:.1}%",
        totals.orders,
        totals.quantity,
        totals.completed_quantity,
        totals.completion_rate * 100.0
    );
    println!(
        "Delayed: {} ({:.1}%)  warnings: {} ({:.1}%)",
        totals.delayed_orders,
        totals.delay_rate * 100.0,
        totals.warning_orders,
        totals.warning_rate * 100.0
    );

    print_group_table("By month", &rollups.by_month);
    print_group_table("By destination", &rollups.by_destination);
    print_group_table("By factory", &rollups.by_factory);
    print_group_table("By model", &rollups.by_model);
}

fn print_group_table(title: &str, groups: &BTreeMap<String, GroupStats>) {
    if groups.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Orders"),
        header_cell("Quantity"),
        header_cell("Completed"),
        header_cell("Rate"),
        header_cell("Delayed"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (key, group) in groups {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(group.orders),
            Cell::new(group.quantity),
            Cell::new(group.completed_quantity),
            Cell::new(format!("{:.1}%", group.completion_rate * 100.0)),
            count_cell(group.delayed_orders, Color::Red),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Critical => Cell::new("CRITICAL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
