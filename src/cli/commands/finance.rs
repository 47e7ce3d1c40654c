use uuid::Uuid;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "League-wide extra incomes (sponsors, donations)",
            "income <add|list|delete>",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "League-wide expenses (equipment and the like)",
            "expense <add|list|delete>",
            cmd_expense,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        Some((sub, rest)) => match sub.to_ascii_lowercase().as_str() {
            "add" => income_add(context, rest),
            "list" => income_list(context),
            "delete" => income_delete(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown income subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: income <add|list|delete>".into(),
        )),
    }
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.split_first() {
        Some((sub, rest)) => match sub.to_ascii_lowercase().as_str() {
            "add" => expense_add(context, rest),
            "list" => expense_list(context),
            "delete" => expense_delete(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown expense subcommand `{}`",
                other
            ))),
        },
        None => Err(CommandError::InvalidArguments(
            "usage: expense <add|list|delete>".into(),
        )),
    }
}

fn income_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (description, amount, date) =
        parse_entry(context, args, "usage: income add <description> <amount> [date]")?;
    context.manager_mut().add_income(&description, amount, date)?;
    cli_io::print_success(format!(
        "Income `{}` of {} recorded.",
        description,
        context.format_amount(amount)
    ));
    Ok(())
}

fn expense_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (item_name, price, date) =
        parse_entry(context, args, "usage: expense add <item> <price> [date]")?;
    context.manager_mut().add_expense(&item_name, price, date)?;
    cli_io::print_success(format!(
        "Expense `{}` of {} recorded.",
        item_name,
        context.format_amount(price)
    ));
    Ok(())
}

fn income_list(context: &mut ShellContext) -> CommandResult {
    output::section("Extra incomes");
    if context.vault().incomes.is_empty() {
        cli_io::print_info("  No records yet.");
        return Ok(());
    }
    let lines: Vec<String> = context
        .vault()
        .incomes
        .iter()
        .enumerate()
        .map(|(position, income)| {
            format!(
                "  {:>2}. {}  {:<24} +{}",
                position + 1,
                income.date,
                income.description,
                context.format_amount(income.amount)
            )
        })
        .collect();
    for line in lines {
        cli_io::print_info(line);
    }
    Ok(())
}

fn expense_list(context: &mut ShellContext) -> CommandResult {
    output::section("League expenses");
    if context.vault().expenses.is_empty() {
        cli_io::print_info("  No records yet.");
        return Ok(());
    }
    let lines: Vec<String> = context
        .vault()
        .expenses
        .iter()
        .enumerate()
        .map(|(position, expense)| {
            format!(
                "  {:>2}. {}  {:<24} -{}",
                position + 1,
                expense.date,
                expense.item_name,
                context.format_amount(expense.price)
            )
        })
        .collect();
    for line in lines {
        cli_io::print_info(line);
    }
    Ok(())
}

fn income_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = indexed_id(
        args,
        context.vault().incomes.iter().map(|income| income.id),
        "usage: income delete <index>",
    )?;
    context.manager_mut().delete_income(id)?;
    cli_io::print_success("Income removed.");
    Ok(())
}

fn expense_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = indexed_id(
        args,
        context.vault().expenses.iter().map(|expense| expense.id),
        "usage: expense delete <index>",
    )?;
    context.manager_mut().delete_expense(id)?;
    cli_io::print_success("Expense removed.");
    Ok(())
}

fn parse_entry(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
) -> Result<(String, f64, chrono::NaiveDate), CommandError> {
    let (label, amount_raw) = match (args.first(), args.get(1)) {
        (Some(label), Some(amount)) => (label.to_string(), amount),
        _ => return Err(CommandError::InvalidArguments(usage.into())),
    };
    if label.trim().is_empty() {
        return Err(CommandError::InvalidArguments(usage.into()));
    }
    let amount = context.parse_amount_arg(amount_raw, "amount")?;
    let date = context.parse_date_arg(args.get(2).copied())?;
    Ok((label, amount, date))
}

fn indexed_id(
    args: &[&str],
    mut ids: impl Iterator<Item = Uuid>,
    usage: &str,
) -> Result<Uuid, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments(usage.into()))?;
    let index: usize = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments("index must be numeric".into()))?;
    ids.nth(index.wrapping_sub(1)).ok_or_else(|| {
        CommandError::InvalidArguments(format!("index {} out of range", raw))
    })
}
