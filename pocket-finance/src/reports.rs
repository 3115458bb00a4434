//! Ad-hoc reports and saving them to disk.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDateTime};
use pocket_core::money::zero;
use pocket_core::round_money;
use pocket_core::time::{month_start, months_back};
use pocket_core::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How many whole months before the reference month the workday report covers.
pub const WORKDAY_REPORT_MONTHS: u32 = 3;

/// Average payment per day kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayKindAverages {
    #[serde(rename = "Рабочий", with = "rust_decimal::serde::float")]
    pub workday: Decimal,
    #[serde(rename = "Выходной", with = "rust_decimal::serde::float")]
    pub weekend: Decimal,
}

/// Two-row table keyed by day kind, under the payment amount column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingByWorkday {
    #[serde(rename = "Сумма платежа")]
    pub payment_amount: DayKindAverages,
}

fn average(sum: Decimal, count: u32) -> Decimal {
    if count == 0 {
        zero()
    } else {
        round_money(sum / Decimal::from(count))
    }
}

/// Average payment amount on workdays (Mon-Fri) and weekends (Sat-Sun).
///
/// The window runs from the first day of the month three months before the
/// reference month up to `date` inclusive. `date` defaults to now.
pub fn spending_by_workday(txns: &[Transaction], date: Option<NaiveDateTime>) -> SpendingByWorkday {
    let end = date.unwrap_or_else(|| Local::now().naive_local());
    let start = months_back(month_start(end), WORKDAY_REPORT_MONTHS);

    let (mut work_sum, mut work_count) = (zero(), 0u32);
    let (mut rest_sum, mut rest_count) = (zero(), 0u32);

    for txn in txns {
        let Some(day) = txn.operation_date else {
            continue;
        };
        if day < start || day > end {
            continue;
        }

        let (sum, count) = if day.weekday().number_from_monday() <= 5 {
            (&mut work_sum, &mut work_count)
        } else {
            (&mut rest_sum, &mut rest_count)
        };
        match sum.checked_add(txn.payment_amount) {
            Some(next) => {
                *sum = next;
                *count += 1;
            }
            None => log::warn!("skipping payment that overflows the report: {}", txn.payment_amount),
        }
    }

    SpendingByWorkday {
        payment_amount: DayKindAverages {
            workday: average(work_sum, work_count),
            weekend: average(rest_sum, rest_count),
        },
    }
}

/// `<name>_<YYYYMMDD_HHMMSS>.json` in the working directory.
pub fn default_report_path(name: &str, at: NaiveDateTime) -> PathBuf {
    PathBuf::from(format!("{name}_{}.json", at.format("%Y%m%d_%H%M%S")))
}

/// Write a report as pretty-printed UTF-8 JSON.
pub fn write_report<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Save a report next to the run, or to `path` when given.
///
/// Saving never fails the report: errors are logged and `None` is returned.
pub fn save_report<T: Serialize>(name: &str, report: &T, path: Option<&Path>) -> Option<PathBuf> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_report_path(name, Local::now().naive_local()));

    match write_report(report, &target) {
        Ok(()) => {
            log::info!("report {name} saved to {}", target.display());
            Some(target)
        }
        Err(e) => {
            log::error!("failed to save report {name}: {e:#}");
            None
        }
    }
}
