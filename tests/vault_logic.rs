mod common;

use chrono::NaiveDate;
use common::setup_manager;
use league_vault::stats::{FinancialStats, MatchBreakdown};
use uuid::Uuid;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

#[test]
fn match_creation_snapshots_the_fee_configuration() {
    let (mut manager, _base) = setup_manager();
    manager.set_player_fee(100.0).unwrap();
    let match_id = manager.create_match(date(7), 50.0, 10.0).unwrap();

    manager.set_player_fee(175.0).unwrap();
    let day = manager.vault().match_day(match_id).unwrap();
    assert_eq!(day.payments.len(), 12);
    assert!(day.payments.iter().all(|p| p.amount == 100.0 && !p.is_paid));
}

#[test]
fn toggling_twice_is_an_involution() {
    let (mut manager, _base) = setup_manager();
    let match_id = manager.create_match(date(7), 0.0, 0.0).unwrap();
    let player_id = manager.vault().players[5].id;

    let initial = manager
        .vault()
        .match_day(match_id)
        .unwrap()
        .payment(player_id)
        .unwrap()
        .is_paid;
    manager.toggle_payment(match_id, player_id).unwrap();
    manager.toggle_payment(match_id, player_id).unwrap();
    let after = manager
        .vault()
        .match_day(match_id)
        .unwrap()
        .payment(player_id)
        .unwrap()
        .is_paid;
    assert_eq!(initial, after);
}

#[test]
fn dangling_ids_are_silent_no_ops() {
    let (mut manager, _base) = setup_manager();
    let match_id = manager.create_match(date(7), 0.0, 0.0).unwrap();

    assert!(!manager
        .toggle_payment(Uuid::new_v4(), manager.vault().players[0].id)
        .unwrap());
    assert!(!manager.toggle_payment(match_id, Uuid::new_v4()).unwrap());
    assert!(!manager.delete_match(Uuid::new_v4()).unwrap());
    assert!(!manager.remove_player(Uuid::new_v4()).unwrap());
    assert!(!manager.delete_expense(Uuid::new_v4()).unwrap());
    assert!(!manager.delete_income(Uuid::new_v4()).unwrap());
}

#[test]
fn removing_a_player_never_rewrites_existing_sheets() {
    let (mut manager, _base) = setup_manager();
    let match_id = manager.create_match(date(7), 0.0, 0.0).unwrap();
    let victim = manager.vault().players[2].id;
    let sheet_before: Vec<Uuid> = manager
        .vault()
        .match_day(match_id)
        .unwrap()
        .payments
        .iter()
        .map(|payment| payment.player_id)
        .collect();

    assert!(manager.remove_player(victim).unwrap());

    let day = manager.vault().match_day(match_id).unwrap();
    let sheet_after: Vec<Uuid> = day
        .payments
        .iter()
        .map(|payment| payment.player_id)
        .collect();
    assert_eq!(sheet_before, sheet_after);
    assert!(day.payment(victim).is_some());
    assert!(manager.vault().player(victim).is_none());
}

#[test]
fn the_documented_three_player_scenario_holds_end_to_end() {
    let (mut manager, _base) = setup_manager();
    // Trim the seeded roster down to A, B, C.
    let seeded: Vec<Uuid> = manager.vault().players.iter().map(|p| p.id).collect();
    for id in seeded {
        manager.remove_player(id).unwrap();
    }
    for name in ["A", "B", "C"] {
        manager.add_player(name).unwrap();
    }
    manager.set_player_fee(100.0).unwrap();
    manager.set_field_fee(300.0).unwrap();

    let match_id = manager.create_match(date(14), 50.0, 10.0).unwrap();
    {
        let vault = manager.vault();
        let stats = FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes);
        assert_eq!(vault.match_day(match_id).unwrap().payments.len(), 3);
        assert_eq!(stats.total_collected_from_players, 0.0);
        assert_eq!(stats.total_weekly_expenses, 360.0);
        assert_eq!(stats.vault_balance, -360.0);
    }

    let a = manager.vault().players[0].id;
    let b = manager.vault().players[1].id;
    manager.toggle_payment(match_id, a).unwrap();
    manager.toggle_payment(match_id, b).unwrap();

    let vault = manager.vault();
    let stats = FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes);
    assert_eq!(stats.total_collected_from_players, 200.0);

    let breakdown = MatchBreakdown::for_match(vault.match_day(match_id).unwrap(), vault.player_fee);
    assert_eq!(breakdown.balance, -160.0);
}

#[test]
fn balance_identity_holds_across_arbitrary_mutation_sequences() {
    let (mut manager, _base) = setup_manager();
    manager.set_player_fee(120.0).unwrap();
    let m1 = manager.create_match(date(7), 150.0, 30.0).unwrap();
    let m2 = manager.create_match(date(14), 200.0, 0.0).unwrap();
    for player in manager.vault().players[..4].to_vec() {
        manager.toggle_payment(m1, player.id).unwrap();
    }
    manager.toggle_payment(m2, manager.vault().players[0].id).unwrap();
    manager.add_income("Sponsor", 1000.0, date(10)).unwrap();
    manager.add_expense("Jerseys", 450.0, date(11)).unwrap();
    manager.delete_match(m1).unwrap();
    let expense_id = manager.vault().expenses[0].id;
    manager.delete_expense(expense_id).unwrap();

    let vault = manager.vault();
    let stats = FinancialStats::compute(&vault.matches, &vault.expenses, &vault.incomes);
    assert_eq!(
        stats.vault_balance,
        (stats.total_collected_from_players + stats.total_extra_income)
            - (stats.total_weekly_expenses + stats.total_league_expenses)
    );
    assert_eq!(stats.match_count, 1);
}
