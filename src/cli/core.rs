//! Shell context, dispatch, and shared command helpers.

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::cli::commands;
use crate::cli::io as cli_io;
use crate::cli::registry::CommandRegistry;
use crate::config::{AppConfig, ConfigManager};
use crate::core::VaultManager;
use crate::errors::VaultError;
use crate::storage::JsonStorage;
use crate::vault::Vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures surfaced while handling a single command line.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] VaultError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failures that terminate the shell itself.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] VaultError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    manager: VaultManager,
    config: AppConfig,
    theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let registry = CommandRegistry::new(commands::all_definitions());
        let storage = JsonStorage::new_default()?;
        let manager = VaultManager::open(Box::new(storage));
        let config = ConfigManager::new()?.load()?;

        Ok(Self {
            mode,
            registry,
            manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn vault(&self) -> &Vault {
        self.manager.vault()
    }

    pub fn manager_mut(&mut self) -> &mut VaultManager {
        &mut self.manager
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn command_names(&self) -> Vec<String> {
        self.registry.names().map(|name| name.to_string()).collect()
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        if let Some(entry) = self.registry.get(command) {
            let handler = entry.handler;
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true)
    }

    /// Two-step destructive confirmation: the data layer never asks, the
    /// shell does. Script mode auto-confirms so tests can drive it.
    pub fn confirm_destructive(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_info("Use `help` for usage details.");
            }
            other => cli_io::print_error(other.to_string()),
        }
    }

    /// Renders an amount with the configured display symbol, dropping
    /// the cents when they are zero.
    pub fn format_amount(&self, value: f64) -> String {
        let rendered = if (value.fract()).abs() < f64::EPSILON {
            format!("{}", value as i64)
        } else {
            format!("{:.2}", value)
        };
        format!("{}{}", rendered, self.config.currency_symbol)
    }

    /// Parses `YYYY-MM-DD`, defaulting to today when absent.
    pub fn parse_date_arg(&self, arg: Option<&str>) -> Result<NaiveDate, CommandError> {
        match arg {
            None => Ok(Local::now().date_naive()),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                CommandError::InvalidArguments(format!(
                    "`{}` is not a valid date (expected YYYY-MM-DD)",
                    raw
                ))
            }),
        }
    }

    pub fn parse_amount_arg(&self, raw: &str, label: &str) -> Result<f64, CommandError> {
        raw.parse::<f64>().map_err(|_| {
            CommandError::InvalidArguments(format!("{} must be numeric, got `{}`", label, raw))
        })
    }

    /// Resolves a 1-based index into the newest-first match history.
    pub fn match_id_at(&self, raw: &str) -> Result<Uuid, CommandError> {
        let index: usize = raw
            .parse()
            .map_err(|_| CommandError::InvalidArguments("match index must be numeric".into()))?;
        self.vault()
            .matches
            .get(index.wrapping_sub(1))
            .map(|day| day.id)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("match index {} out of range", raw))
            })
    }

    /// Resolves a player by 1-based roster index or by name.
    pub fn player_id_for(&self, raw: &str) -> Result<Uuid, CommandError> {
        if let Ok(index) = raw.parse::<usize>() {
            return self
                .vault()
                .players
                .get(index.wrapping_sub(1))
                .map(|player| player.id)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!("roster index {} out of range", raw))
                });
        }
        self.vault()
            .player_by_name(raw)
            .map(|player| player.id)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "no player named `{}`. Use `roster list` to view the roster.",
                    raw
                ))
            })
    }
}
