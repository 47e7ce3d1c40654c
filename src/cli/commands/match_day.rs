use chrono::Local;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::MatchDay;
use crate::stats::MatchBreakdown;

const DEFAULT_KEEPER_FEE: f64 = 200.0;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "match",
        "Record and settle weekly match days",
        "match <new|list|show|toggle|delete>",
        cmd_match,
    )]
}

fn cmd_match(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some((subcommand, rest)) = args.split_first() {
        match subcommand.to_ascii_lowercase().as_str() {
            "new" => handle_new(context, rest),
            "list" => handle_list(context),
            "show" => handle_show(context, rest),
            "toggle" => handle_toggle(context, rest),
            "delete" => handle_delete(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown match subcommand `{}`",
                other
            ))),
        }
    } else {
        Err(CommandError::InvalidArguments(
            "usage: match <new|list|show|toggle|delete>".into(),
        ))
    }
}

fn handle_new(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (date, keeper_fee, other_expense) =
        if context.mode() == CliMode::Interactive && args.is_empty() {
            let today = Local::now().date_naive();
            let raw_date = cli_io::prompt_text(
                context.theme(),
                &format!("Match date (YYYY-MM-DD, enter for {})", today),
            )?;
            let date = if raw_date.trim().is_empty() {
                today
            } else {
                context.parse_date_arg(Some(raw_date.trim()))?
            };
            let keeper = cli_io::prompt_amount(context.theme(), "Keeper fee", DEFAULT_KEEPER_FEE)?;
            let other = cli_io::prompt_amount(context.theme(), "Other expense", 0.0)?;
            (date, keeper, other)
        } else {
            let date = context.parse_date_arg(args.first().copied())?;
            let keeper = match args.get(1) {
                Some(raw) => context.parse_amount_arg(raw, "keeper_fee")?,
                None => DEFAULT_KEEPER_FEE,
            };
            let other = match args.get(2) {
                Some(raw) => context.parse_amount_arg(raw, "other_expense")?,
                None => 0.0,
            };
            (date, keeper, other)
        };

    let id = context
        .manager_mut()
        .create_match(date, keeper_fee, other_expense)?;
    let player_count = context
        .vault()
        .match_day(id)
        .map(|day| day.payments.len())
        .unwrap_or(0);
    cli_io::print_success(format!(
        "Match on {} created with {} players on the sheet.",
        date, player_count
    ));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    if context.vault().matches.is_empty() {
        cli_io::print_info("No matches recorded yet. Use `match new` to start a week.");
        return Ok(());
    }
    output::section("Match history");
    let lines: Vec<String> = context
        .vault()
        .matches
        .iter()
        .enumerate()
        .map(|(position, day)| summary_line(context, position + 1, day))
        .collect();
    for line in lines {
        cli_io::print_info(line);
    }
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: match show <index>".into())
    })?;
    let match_id = context.match_id_at(index)?;
    let vault = context.vault();
    let day = vault
        .match_day(match_id)
        .expect("match id resolved from index");
    let breakdown = MatchBreakdown::for_match(day, vault.player_fee);

    output::section(format!("Match on {}", day.date));
    cli_io::print_info(format!(
        "  {} of {} players paid — collected {}",
        breakdown.paid_count,
        day.payments.len(),
        context.format_amount(breakdown.player_income)
    ));
    cli_io::print_info(format!(
        "  Costs: field {} + keeper {} + other {} = {}",
        context.format_amount(day.field_fee),
        context.format_amount(day.keeper_fee),
        context.format_amount(day.other_expense),
        context.format_amount(breakdown.total_cost)
    ));
    cli_io::print_info(format!(
        "  Field fee coverage: {} {:.0}%",
        coverage_meter(breakdown.field_fee_coverage),
        breakdown.field_fee_coverage * 100.0
    ));
    cli_io::print_info(format!(
        "  Vault effect: {}",
        context.format_amount(breakdown.balance)
    ));

    cli_io::print_info("  Sheet:");
    for payment in &day.payments {
        let name = vault
            .player(payment.player_id)
            .map(|player| player.name.as_str())
            .unwrap_or("(removed player)");
        let mark = if payment.is_paid { "[✓]" } else { "[ ]" };
        cli_io::print_info(format!(
            "    {} {:<20} {}",
            mark,
            name,
            context.format_amount(payment.amount)
        ));
    }
    Ok(())
}

fn handle_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (index, player) = match (args.first(), args.get(1)) {
        (Some(index), Some(player)) => (index, player),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: match toggle <index> <player name or roster index>".into(),
            ))
        }
    };
    let match_id = context.match_id_at(index)?;
    let player_id = context.player_id_for(player)?;

    if context.manager_mut().toggle_payment(match_id, player_id)? {
        let paid = context
            .vault()
            .match_day(match_id)
            .and_then(|day| day.payment(player_id))
            .map(|payment| payment.is_paid)
            .unwrap_or(false);
        let verb = if paid { "marked paid" } else { "marked unpaid" };
        cli_io::print_success(format!("Player {}.", verb));
    } else {
        // Resolvable ids can still miss the sheet: players added to the
        // roster after the match was created have no entry there.
        cli_io::print_warning("That player is not on this match's sheet.");
    }
    Ok(())
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: match delete <index>".into())
    })?;
    let match_id = context.match_id_at(index)?;
    let date = context
        .vault()
        .match_day(match_id)
        .map(|day| day.date)
        .expect("match id resolved from index");

    if !context.confirm_destructive(&format!(
        "Remove the match on {}? This cannot be undone.",
        date
    ))? {
        cli_io::print_info("Operation cancelled.");
        return Ok(());
    }

    context.manager_mut().delete_match(match_id)?;
    cli_io::print_success(format!("Match on {} removed.", date));
    Ok(())
}

/// One-line rendering shared by `match list` and the dashboard.
pub(crate) fn summary_line(context: &ShellContext, position: usize, day: &MatchDay) -> String {
    let breakdown = MatchBreakdown::for_match(day, context.vault().player_fee);
    format!(
        "  {:>2}. {}  {} paid, collected {}, balance {}",
        position,
        day.date,
        breakdown.paid_count,
        context.format_amount(breakdown.player_income),
        context.format_amount(breakdown.balance)
    )
}

fn coverage_meter(ratio: f64) -> String {
    const WIDTH: usize = 10;
    let filled = (ratio * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_meter_scales_to_ten_cells() {
        assert_eq!(coverage_meter(0.0), "[----------]");
        assert_eq!(coverage_meter(0.5), "[#####-----]");
        assert_eq!(coverage_meter(1.0), "[##########]");
    }
}
