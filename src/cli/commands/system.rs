use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::stats::FinancialStats;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Vault balance, totals, and the latest matches",
            "dashboard",
            cmd_dashboard,
        ),
        CommandEntry::new("help", "List commands or show usage", "help [command]", cmd_help),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let vault = context.vault();
    let stats = FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes);

    output::section("Vault");
    cli_io::print_info(format!(
        "  Balance: {}   ({} matches)",
        context.format_amount(stats.vault_balance),
        stats.match_count
    ));
    cli_io::print_info(format!(
        "  Player income:   {}",
        context.format_amount(stats.total_collected_from_players)
    ));
    cli_io::print_info(format!(
        "  Extra income:    {}",
        context.format_amount(stats.total_extra_income)
    ));
    cli_io::print_info(format!(
        "  Weekly expenses: {}",
        context.format_amount(stats.total_weekly_expenses)
    ));
    cli_io::print_info(format!(
        "  League expenses: {}",
        context.format_amount(stats.total_league_expenses)
    ));

    output::section("Recent matches");
    if context.vault().matches.is_empty() {
        cli_io::print_info("  No matches recorded yet.");
    } else {
        let lines: Vec<String> = context
            .vault()
            .matches
            .iter()
            .take(3)
            .enumerate()
            .map(|(position, day)| super::match_day::summary_line(context, position + 1, day))
            .collect();
        for line in lines {
            cli_io::print_info(line);
        }
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context.registry().get(&name.to_lowercase()).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown command `{}`", name))
        })?;
        cli_io::print_info(format!("{} — {}", entry.name, entry.description));
        cli_io::print_info(format!("usage: {}", entry.usage));
        return Ok(());
    }

    output::section("Commands");
    let lines: Vec<String> = context
        .registry()
        .iter()
        .map(|entry| format!("  {:<10} {}", entry.name, entry.description))
        .collect();
    for line in lines {
        cli_io::print_info(line);
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
