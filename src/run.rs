mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

use anyhow::Result;
use std::path::PathBuf;

use crate::input::{coerce_amount, coerce_non_negative};
use crate::models::BudgetState;

/// Parsed command line. The first bare word is the subcommand; no
/// subcommand means the interactive TUI.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Options {
    pub(crate) command: Option<String>,
    pub(crate) income: Option<String>,
    pub(crate) goal: Option<String>,
    pub(crate) saved: Option<String>,
    pub(crate) file: Option<PathBuf>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) empty: bool,
    pub(crate) verbose: bool,
}

impl Options {
    pub(crate) fn parse(args: &[String]) -> Result<Self> {
        let mut opts = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))
            };
            match arg.as_str() {
                "--income" => opts.income = Some(value("--income")?),
                "--goal" => opts.goal = Some(value("--goal")?),
                "--saved" => opts.saved = Some(value("--saved")?),
                "--file" | "-f" => opts.file = Some(PathBuf::from(value("--file")?)),
                "--config" | "-c" => opts.config = Some(PathBuf::from(value("--config")?)),
                "--empty" => opts.empty = true,
                "--verbose" | "-v" => opts.verbose = true,
                "--help" | "-h" => opts.command = Some("help".into()),
                "--version" | "-V" => opts.command = Some("version".into()),
                flag if flag.starts_with('-') => anyhow::bail!("Unknown option: {flag}"),
                cmd => {
                    if opts.command.is_some() {
                        anyhow::bail!("Unexpected argument: {cmd}");
                    }
                    opts.command = Some(cmd.to_string());
                }
            }
        }

        if opts.empty && opts.file.is_some() {
            anyhow::bail!("--empty and --file cannot be used together");
        }

        Ok(opts)
    }

    /// Flags win over the config file. Values are coerced like form input.
    pub(crate) fn apply_overrides(&self, budget: &mut BudgetState) {
        if let Some(ref v) = self.income {
            budget.income = coerce_amount(v);
        }
        if let Some(ref v) = self.goal {
            budget.savings_goal = coerce_non_negative(v);
        }
        if let Some(ref v) = self.saved {
            budget.saved_amount = coerce_non_negative(v);
        }
    }

    pub(crate) fn is_tui(&self) -> bool {
        self.command.is_none()
    }
}
