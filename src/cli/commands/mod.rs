pub mod fees;
pub mod finance;
pub mod match_day;
pub mod report;
pub mod roster;
pub mod system;

use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(match_day::definitions());
    commands.extend(roster::definitions());
    commands.extend(finance::definitions());
    commands.extend(fees::definitions());
    commands.extend(report::definitions());
    commands
}
