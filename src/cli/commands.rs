use std::{io::Write, path::PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::services::{ExpenseService, ServiceError, SummaryService},
    domain::{expense::parse_timestamp, BucketOrder, Displayable, NewExpense},
    errors::ExpenseError,
    storage::{ExpenseSource, JsonFileSource},
};

use super::{
    output::{apply_style, MessageKind, OutputPreferences},
    render::{render_day_buckets, render_rejections},
};

pub const USAGE: &str = "\
Usage: expense_list [OPTIONS] [COMMAND]

Commands:
  list                              Show expenses grouped by day (default)
  add DESC AMOUNT DATE [CATEGORY]   Record an expense (DATE as YYYY-MM-DD[THH:MM[:SS]])
  delete ID                         Remove an expense
  help                              Show this message

Options:
  --store PATH        Expense file (defaults to the configured store)
  --order ORDER       Day order: newest, oldest or insertion
  --currency CODE     Currency used to format amounts
  --skip-invalid      List valid records and report invalid ones instead of failing
  --no-color          Disable coloured output";

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Add {
        desc: String,
        amount: f64,
        date: NaiveDateTime,
        cat: Option<String>,
    },
    Delete(String),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub store: Option<PathBuf>,
    pub order: Option<BucketOrder>,
    pub currency: Option<String>,
    pub skip_invalid: bool,
    pub color: bool,
    pub command: Command,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            store: None,
            order: None,
            currency: None,
            skip_invalid: false,
            color: true,
            command: Command::List,
        }
    }
}

impl CliArgs {
    /// Parses arguments without the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut positional = Vec::new();
        let mut iter = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--store" => parsed.store = Some(PathBuf::from(required(&mut iter, "--store")?)),
                "--order" => parsed.order = Some(required(&mut iter, "--order")?.parse()?),
                "--currency" => parsed.currency = Some(required(&mut iter, "--currency")?),
                "--skip-invalid" => parsed.skip_invalid = true,
                "--no-color" => parsed.color = false,
                "-h" | "--help" => positional.push("help".to_string()),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Input(format!("unknown option `{}`", flag)))
                }
                other => positional.push(other.to_string()),
            }
        }

        parsed.command = parse_command(&positional)?;
        Ok(parsed)
    }
}

fn required(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    iter.next()
        .ok_or_else(|| CliError::Input(format!("`{}` expects a value", flag)))
}

fn parse_command(positional: &[String]) -> Result<Command, CliError> {
    let Some((name, rest)) = positional.split_first() else {
        return Ok(Command::List);
    };
    match (name.as_str(), rest) {
        ("list", []) => Ok(Command::List),
        ("help", _) => Ok(Command::Help),
        ("delete", [id]) => Ok(Command::Delete(id.clone())),
        ("add", [desc, amount, date, cat @ ..]) if cat.len() <= 1 => {
            let amount = amount
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| CliError::Input(format!("`{}` is not a valid amount", amount)))?;
            let date = parse_timestamp(date)
                .ok_or_else(|| CliError::Input(format!("`{}` is not a valid date", date)))?;
            Ok(Command::Add {
                desc: desc.clone(),
                amount,
                date,
                cat: cat.first().cloned(),
            })
        }
        _ => Err(CliError::Input(format!(
            "unrecognised command `{}`; run `expense_list help`",
            positional.join(" ")
        ))),
    }
}

/// Runs one command against the configured store, writing results to `out`
/// and per-record warnings to `err`.
pub fn run(
    args: &CliArgs,
    manager: &ConfigManager,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let prefs = OutputPreferences { color: args.color };
    if args.command == Command::Help {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    }

    let config = effective_config(args, manager.load()?)?;
    let store_path = args
        .store
        .clone()
        .unwrap_or_else(|| manager.store_path(&config));
    let mut source = JsonFileSource::open(store_path)?;

    match &args.command {
        Command::List => {
            let expenses = source.list()?;
            let buckets = if args.skip_invalid {
                let report = SummaryService::day_buckets_lenient(&expenses, config.bucket_order)?;
                err.write_all(render_rejections(&report.rejected, &prefs).as_bytes())?;
                report.buckets
            } else {
                SummaryService::day_buckets(&expenses, config.bucket_order)?
            };
            let formatter = config.formatter();
            out.write_all(render_day_buckets(&buckets, &formatter, &prefs).as_bytes())?;
        }
        Command::Add {
            desc,
            amount,
            date,
            cat,
        } => {
            let mut input = NewExpense::new(desc.clone(), *amount, *date);
            input.cat = cat.clone();
            let created = ExpenseService::add(&mut source, input)?;
            let message = format!("Recorded expense `{}` ({})", created.id, created.display_label());
            writeln!(out, "{}", apply_style(MessageKind::Success, message, &prefs))?;
        }
        Command::Delete(id) => {
            let removed = ExpenseService::remove(&mut source, id)?;
            let message = format!("Deleted expense `{}` ({})", removed.id, removed.display_label());
            writeln!(out, "{}", apply_style(MessageKind::Success, message, &prefs))?;
        }
        Command::Help => {}
    }
    Ok(())
}

fn effective_config(args: &CliArgs, mut config: Config) -> Result<Config, CliError> {
    if let Some(order) = args.order {
        config.bucket_order = order;
    }
    if let Some(currency) = &args.currency {
        config.currency = currency.trim().to_uppercase();
    }
    config.validate()?;
    Ok(config)
}
