mod common;

use std::fs;

use chrono::NaiveDate;
use common::{reopen_manager, setup_manager};
use league_vault::stats::FinancialStats;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()
}

#[test]
fn fresh_directory_loads_seed_state() {
    let (manager, _base) = setup_manager();
    let vault = manager.vault();
    assert_eq!(vault.field_fee, 2800.0);
    assert_eq!(vault.player_fee, 225.0);
    assert_eq!(vault.players.len(), 12);
    assert!(vault.matches.is_empty());
    assert!(vault.expenses.is_empty());
    assert!(vault.incomes.is_empty());
}

#[test]
fn aggregation_is_identical_after_a_reload() {
    let (mut manager, base) = setup_manager();
    manager.set_player_fee(150.0).unwrap();
    let match_id = manager.create_match(date(), 200.0, 25.0).unwrap();
    manager
        .toggle_payment(match_id, manager.vault().players[1].id)
        .unwrap();
    manager.add_income("Sponsor", 750.0, date()).unwrap();
    manager.add_expense("Nets", 90.0, date()).unwrap();

    let before = {
        let vault = manager.vault();
        FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes)
    };
    drop(manager);

    let reopened = reopen_manager(&base);
    let vault = reopened.vault();
    let after = FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes);
    assert_eq!(before, after);
    assert_eq!(vault.player_fee, 150.0);
}

#[test]
fn every_mutation_is_on_disk_before_it_returns() {
    let (mut manager, base) = setup_manager();
    manager.create_match(date(), 100.0, 0.0).unwrap();

    let raw = fs::read_to_string(base.join("matches.json")).expect("matches written through");
    assert!(raw.contains("2025-03-21"));

    manager.add_player("Deniz").unwrap();
    let raw = fs::read_to_string(base.join("players.json")).expect("players written through");
    assert!(raw.contains("Deniz"));
}

#[test]
fn a_corrupt_key_falls_back_to_its_seed_alone() {
    let (mut manager, base) = setup_manager();
    manager.add_player("Deniz").unwrap();
    manager.create_match(date(), 100.0, 0.0).unwrap();
    drop(manager);

    fs::write(base.join("matches.json"), "{ not json").unwrap();

    let reopened = reopen_manager(&base);
    // The broken key is silently treated as missing...
    assert!(reopened.vault().matches.is_empty());
    // ...while intact keys load normally.
    assert_eq!(reopened.vault().players.len(), 13);
}

#[test]
fn a_missing_key_is_not_an_error() {
    let (mut manager, base) = setup_manager();
    manager.set_field_fee(3000.0).unwrap();
    drop(manager);

    fs::remove_file(base.join("config_field_fee.json")).unwrap();

    let reopened = reopen_manager(&base);
    assert_eq!(reopened.vault().field_fee, 2800.0);
}

#[test]
fn persisted_layout_is_one_json_document_per_key() {
    let (mut manager, base) = setup_manager();
    manager.set_field_fee(3000.0).unwrap();
    manager.set_player_fee(250.0).unwrap();
    manager.create_match(date(), 0.0, 0.0).unwrap();
    manager.add_income("Sponsor", 10.0, date()).unwrap();
    manager.add_expense("Tape", 5.0, date()).unwrap();
    manager.add_player("Deniz").unwrap();

    for key in [
        "config_field_fee",
        "config_player_fee",
        "players",
        "matches",
        "league_expenses",
        "league_incomes",
    ] {
        let path = base.join(format!("{key}.json"));
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("expected persisted key file {key}.json"));
        serde_json::from_str::<serde_json::Value>(&raw)
            .unwrap_or_else(|_| panic!("{key}.json must hold valid JSON"));
    }
}
