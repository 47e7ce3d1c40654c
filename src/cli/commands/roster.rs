use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "roster",
        "Manage the player roster",
        "roster <list|add|remove>",
        cmd_roster,
    )]
}

fn cmd_roster(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some((subcommand, rest)) = args.split_first() {
        match subcommand.to_ascii_lowercase().as_str() {
            "list" => handle_list(context),
            "add" => handle_add(context, rest),
            "remove" => handle_remove(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown roster subcommand `{}`",
                other
            ))),
        }
    } else {
        Err(CommandError::InvalidArguments(
            "usage: roster <list|add|remove>".into(),
        ))
    }
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let vault = context.vault();
    output::section(format!("Roster ({} players)", vault.players.len()));
    for (position, player) in vault.players.iter().enumerate() {
        cli_io::print_info(format!("  {:>2}. {}", position + 1, player.name));
    }
    Ok(())
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    match context.manager_mut().add_player(&name)? {
        Some(_) => {
            cli_io::print_success(format!("Player `{}` added to the roster.", name.trim()));
            cli_io::print_info("They will appear on sheets of matches created from now on.");
        }
        None => cli_io::print_warning("Player name cannot be empty."),
    }
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = args.join(" ");
    if reference.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: roster remove <player name or roster index>".into(),
        ));
    }
    let player_id = context.player_id_for(reference.trim())?;
    let name = context
        .vault()
        .player(player_id)
        .map(|player| player.name.clone())
        .expect("player id resolved from reference");

    if !context.confirm_destructive(&format!("Remove `{}` from the roster?", name))? {
        cli_io::print_info("Operation cancelled.");
        return Ok(());
    }

    context.manager_mut().remove_player(player_id)?;
    cli_io::print_success(format!("Player `{}` removed.", name));
    cli_io::print_info("Existing match sheets keep their entries.");
    Ok(())
}
