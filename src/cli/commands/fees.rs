use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "fees",
        "Show or change the configured field and player fees",
        "fees <show|field <amount>|player <amount>>",
        cmd_fees,
    )]
}

fn cmd_fees(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        None => handle_show(context),
        Some((sub, rest)) => match sub.to_ascii_lowercase().as_str() {
            "show" => handle_show(context),
            "field" => handle_set_field(context, rest),
            "player" => handle_set_player(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown fees subcommand `{}`",
                other
            ))),
        },
    }
}

fn handle_show(context: &mut ShellContext) -> CommandResult {
    output::section("Fees");
    cli_io::print_info(format!(
        "  Field fee:  {}",
        context.format_amount(context.vault().field_fee)
    ));
    cli_io::print_info(format!(
        "  Player fee: {}",
        context.format_amount(context.vault().player_fee)
    ));
    cli_io::print_info("  Changes apply to matches created from now on.");
    Ok(())
}

fn handle_set_field(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: fees field <amount>".into())
    })?;
    let value = context.parse_amount_arg(raw, "field fee")?;
    context.manager_mut().set_field_fee(value)?;
    cli_io::print_success(format!(
        "Field fee set to {}.",
        context.format_amount(value)
    ));
    Ok(())
}

fn handle_set_player(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: fees player <amount>".into())
    })?;
    let value = context.parse_amount_arg(raw, "player fee")?;
    context.manager_mut().set_player_fee(value)?;
    cli_io::print_success(format!(
        "Player fee set to {}.",
        context.format_amount(value)
    ));
    Ok(())
}
