use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("league_vault_cli").expect("binary builds");
    cmd.env("LEAGUE_VAULT_HOME", home.path())
        .env("LEAGUE_VAULT_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn fresh_install_shows_seed_fees_and_roster() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("fees\nroster list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2800₺"))
        .stdout(predicate::str::contains("225₺"))
        .stdout(predicate::str::contains("Roster (12 players)"))
        .stdout(predicate::str::contains("Kaptan Ali"));
}

#[test]
fn scripted_week_settles_to_the_expected_balance() {
    let home = TempDir::new().unwrap();
    let script = "\
fees player 100
fees field 300
match new 2025-03-07 50 10
match toggle 1 1
match toggle 1 2
dashboard
exit
";
    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 players on the sheet"))
        .stdout(predicate::str::contains("Balance: -160₺"))
        .stdout(predicate::str::contains("Player income:   200₺"))
        .stdout(predicate::str::contains("Weekly expenses: 360₺"));
}

#[test]
fn state_survives_between_script_sessions() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("roster add \"Deniz\"\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added to the roster"));

    script_command(&home)
        .write_stdin("roster list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roster (13 players)"))
        .stdout(predicate::str::contains("Deniz"));
}

#[test]
fn unknown_commands_suggest_and_do_not_abort() {
    let home = TempDir::new().unwrap();
    script_command(&home)
        .write_stdin("dashbord\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command `dashbord`"))
        .stdout(predicate::str::contains("Suggestion: `dashboard`?"));
}

#[test]
fn destructive_commands_auto_confirm_in_script_mode() {
    let home = TempDir::new().unwrap();
    let script = "\
match new 2025-03-07
roster remove \"Kaptan Ali\"
match delete 1
roster list
exit
";
    script_command(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Player `Kaptan Ali` removed."))
        .stdout(predicate::str::contains("Match on 2025-03-07 removed."))
        .stdout(predicate::str::contains("Roster (11 players)"));
}
