//! Stock report over a JSON batch of items.
//!
//! A thin harness around `bistro-stock`: load items (and optionally a policy),
//! run the engine, render the result. The inventory data layer normally does
//! the loading; this exists for ops checks and fixtures.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use bistro_core::ItemId;
use bistro_observability::LogFormat;
use bistro_stock::{
    MaterialItem, ReorderLine, StockEngine, StockPolicy, StockStatistics, StockStatus,
    status_label, validate_packaging,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "bistro-report")]
#[command(about = "Stock status, value and reorder report for an inventory batch", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file with an array of items
    #[arg(short, long)]
    pub items: PathBuf,

    /// JSON file overriding the default stock policy
    #[arg(short, long, env = "BISTRO_POLICY")]
    pub policy: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Human-readable logs instead of JSON
    #[arg(long)]
    pub pretty_logs: bool,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.pretty_logs {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// A countable item whose packaging cannot drive reorder rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagingWarning {
    pub item_id: ItemId,
    pub issue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    pub statistics: StockStatistics,
    pub reorder_plan: Vec<ReorderLine>,
    pub packaging_warnings: Vec<PackagingWarning>,
}

pub fn load_items(path: &Path) -> Result<Vec<MaterialItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse items file {}", path.display()))
}

pub fn load_policy(path: Option<&Path>) -> Result<StockPolicy> {
    let Some(path) = path else {
        return Ok(StockPolicy::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    let policy: StockPolicy = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse policy file {}", path.display()))?;
    policy
        .validate()
        .with_context(|| format!("invalid policy in {}", path.display()))?;
    Ok(policy)
}

pub fn build_report(engine: &StockEngine, items: &[MaterialItem]) -> StockReport {
    let packaging_warnings = items
        .iter()
        .filter_map(|item| {
            validate_packaging(item).err().map(|issue| {
                tracing::warn!(
                    component = "inventory",
                    item_id = item.id.as_str(),
                    %issue,
                    "packaging ignored for reorder rounding"
                );
                PackagingWarning {
                    item_id: item.id.clone(),
                    issue: issue.to_string(),
                }
            })
        })
        .collect();

    StockReport {
        statistics: engine.statistics(items),
        reorder_plan: engine.reorder_plan(items),
        packaging_warnings,
    }
}

pub fn render_text(report: &StockReport) -> String {
    let stats = &report.statistics;
    let mut out = String::new();

    let _ = writeln!(out, "Items: {}", stats.total);
    for status in StockStatus::ALL {
        let _ = writeln!(out, "  {:<14} {}", status_label(status.as_str()), stats.count(status));
    }
    let _ = writeln!(out, "Total value: {}", stats.total_value);
    let _ = writeln!(out, "Average stock: {}", stats.average_stock);

    if report.reorder_plan.is_empty() {
        let _ = writeln!(out, "Nothing to reorder.");
    } else {
        let _ = writeln!(out, "Reorder ({}):", report.reorder_plan.len());
        for line in &report.reorder_plan {
            let _ = writeln!(
                out,
                "  [{}] {} ({}, {}): {} {}",
                line.priority,
                line.name,
                line.item_id,
                line.kind,
                line.quantity,
                line.unit
            );
        }
    }

    for warning in &report.packaging_warnings {
        let _ = writeln!(out, "Warning: {}: {}", warning.item_id, warning.issue);
    }
    out
}

/// Load, compute and render according to `cli`.
pub fn run(cli: &Cli) -> Result<String> {
    let policy = load_policy(cli.policy.as_deref())?;
    let engine = StockEngine::with_policy(policy).context("invalid stock policy")?;
    let items = load_items(&cli.items)?;
    let policy = engine.policy();
    tracing::info!(
        items = items.len(),
        critical_ratio = %policy.critical_ratio,
        reorder_multiplier = %policy.reorder_multiplier,
        "loaded inventory batch"
    );

    let report = build_report(&engine, &items);
    match cli.format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            json.push('\n');
            Ok(json)
        }
    }
}
