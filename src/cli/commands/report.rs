use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::summary::SummaryClient;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "report",
        "Ask the league president for a narrative summary",
        "report",
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    cli_io::print_info("Crunching the numbers, captain, hold on...");

    let client = SummaryClient::from_config(&context.config().summary);
    let narrative = client.narrate(context.vault(), &context.config().currency_symbol);

    output::section("The president's report");
    cli_io::print_info(narrative);
    Ok(())
}
