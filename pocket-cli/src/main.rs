use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use pocket_core::time::{default_reference, parse_reference, parse_report_date};
use pocket_finance::{
    HttpQuoteSource, RoundUpStep, build_main_page, get_currency_rates, get_stock_prices,
    investment_bank, save_report, spending_by_workday,
};
use pocket_ingest::read_operations;
use std::path::PathBuf;

mod config;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "pocket", version, about = "Summaries over a personal bank export")]
struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Month-to-date main page: cards, top operations, rates, and prices
    MainPage {
        /// Bank export (CSV)
        #[arg(long)]
        operations: PathBuf,

        /// JSON with user_currencies and user_stocks
        #[arg(long, default_value = "user_settings.json")]
        settings: PathBuf,

        /// End of the reporting window, "YYYY-MM-DD HH:MM:SS"
        #[arg(long)]
        at: Option<String>,

        /// Skip currency and stock lookups
        #[arg(long)]
        offline: bool,
    },

    /// Spare change from rounding each payment of a month up
    Invest {
        #[arg(long)]
        operations: PathBuf,

        /// Month as YYYY-MM
        #[arg(long)]
        month: String,

        /// Rounding step: 10, 50 or 100
        #[arg(long, default_value = "50")]
        step: RoundUpStep,
    },

    /// Average payment on workdays vs weekends
    WorkdayReport {
        #[arg(long)]
        operations: PathBuf,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Also write the report as JSON (optionally to the given file)
        #[arg(long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::configure_logging(cli.verbose)?;

    match cli.command {
        Command::MainPage {
            operations,
            settings,
            at,
            offline,
        } => {
            let reference = match at.as_deref() {
                Some(raw) => parse_reference(raw)?,
                None => default_reference(),
            };
            let cfg = AppConfig::load(&settings, offline)?;
            let txns = read_operations(&operations);

            let (rates, prices) = match cfg.credentials {
                Some(credentials) => {
                    let source = HttpQuoteSource::new(cfg.endpoints, credentials)?;
                    (
                        get_currency_rates(&source, &cfg.settings.user_currencies).await,
                        get_stock_prices(&source, &cfg.settings.user_stocks).await,
                    )
                }
                None => (Vec::new(), Vec::new()),
            };

            let page = build_main_page(&txns, reference, Local::now().naive_local(), rates, prices);
            print_json(&page)?;
        }

        Command::Invest {
            operations,
            month,
            step,
        } => {
            let txns = read_operations(&operations);
            println!("{}", investment_bank(&txns, &month, step));
        }

        Command::WorkdayReport {
            operations,
            date,
            save,
        } => {
            let date = date.as_deref().map(parse_report_date).transpose()?;
            let txns = read_operations(&operations);
            let report = spending_by_workday(&txns, date);
            print_json(&report)?;

            if let Some(target) = save {
                save_report("spending_by_workday", &report, target.as_deref());
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["pocket", "invest", "--operations", "ops.csv", "--month", "2021-12", "--step", "10"]);
        match cli.command {
            Command::Invest { month, step, .. } => {
                assert_eq!(month, "2021-12");
                assert_eq!(step, RoundUpStep::Ten);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(Cli::try_parse_from(["pocket", "invest", "--operations", "o.csv", "--month", "2021-12", "--step", "25"]).is_err());

        let cli = Cli::parse_from(["pocket", "--verbose", "main-page", "--operations", "ops.csv", "--offline"]);
        assert!(cli.verbose);
        match cli.command {
            Command::MainPage { settings, offline, at, .. } => {
                assert_eq!(settings, PathBuf::from("user_settings.json"));
                assert!(offline);
                assert!(at.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_save_flag_with_and_without_file() {
        let cli = Cli::parse_from(["pocket", "workday-report", "--operations", "ops.csv", "--save"]);
        match cli.command {
            Command::WorkdayReport { save, .. } => assert_eq!(save, Some(None)),
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::parse_from(["pocket", "workday-report", "--operations", "ops.csv", "--save", "out.json"]);
        match cli.command {
            Command::WorkdayReport { save, .. } => assert_eq!(save, Some(Some(PathBuf::from("out.json")))),
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::parse_from(["pocket", "workday-report", "--operations", "ops.csv"]);
        match cli.command {
            Command::WorkdayReport { save, .. } => assert_eq!(save, None),
            other => panic!("unexpected {other:?}"),
        }
    }
}
