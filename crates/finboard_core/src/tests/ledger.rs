//! Tests for append validation and ordering guarantees

use jiff::civil::date;

use super::tx;
use crate::error::ValidationError;
use crate::model::{Category, Kind, Transaction, parse_date};
use crate::Ledger;

#[test]
fn test_empty_ledger() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.len(), 0);
    assert!(ledger.all().is_empty());
}

#[test]
fn test_sample_ledger_shape() {
    let ledger = Ledger::sample();
    assert_eq!(ledger.len(), 4);

    // Seed records arrive in date order and alternate income/expense
    let kinds: Vec<Kind> = ledger.all().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![Kind::Income, Kind::Expense, Kind::Expense, Kind::Income]
    );
}

#[test]
fn test_append_grows_by_one_and_preserves_prior_records() {
    let mut ledger = Ledger::sample();
    let before: Vec<Transaction> = ledger.all().to_vec();

    ledger
        .append(tx(
            date(2023, 10, 20),
            Category::Entertainment,
            Kind::Expense,
            2_500_000,
        ))
        .unwrap();

    assert_eq!(ledger.len(), before.len() + 1);
    assert_eq!(&ledger.all()[..before.len()], &before[..]);
    assert_eq!(ledger.all().last().unwrap().amount, 2_500_000);
}

#[test]
fn test_constructor_rejects_negative_amount() {
    let err = Transaction::new(date(2023, 10, 1), Category::Other, Kind::Expense, -1)
        .unwrap_err();
    assert!(matches!(err, ValidationError::NegativeAmount(-1)));
}

#[test]
fn test_append_defends_against_negative_amount() {
    // A literal-built record can bypass Transaction::new; append must
    // still reject it without corrupting the ledger.
    let mut ledger = Ledger::sample();
    let bad = Transaction {
        date: date(2023, 10, 2),
        category: Category::Other,
        kind: Kind::Expense,
        amount: -500,
    };

    let err = ledger.append(bad).unwrap_err();
    assert!(matches!(err, ValidationError::NegativeAmount(-500)));
    assert_eq!(ledger.len(), 4);
}

#[test]
fn test_zero_amount_is_valid() {
    let mut ledger = Ledger::new();
    ledger
        .append(tx(date(2023, 10, 1), Category::Other, Kind::Income, 0))
        .unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_category_and_kind_parsing() {
    assert_eq!("Groceries".parse::<Category>().unwrap(), Category::Groceries);
    assert_eq!("income".parse::<Kind>().unwrap(), Kind::Income);
    assert_eq!(" Expense ".parse::<Kind>().unwrap(), Kind::Expense);

    assert!(matches!(
        "Utilities".parse::<Category>(),
        Err(ValidationError::UnknownCategory(_))
    ));
    assert!(matches!(
        "Transfer".parse::<Kind>(),
        Err(ValidationError::UnknownKind(_))
    ));
}

#[test]
fn test_date_parsing() {
    assert_eq!(parse_date(" 2023-10-05 ").unwrap(), date(2023, 10, 5));
    assert!(matches!(
        parse_date("2023-13-40"),
        Err(ValidationError::InvalidDate { .. })
    ));
    assert!(matches!(
        parse_date("yesterday"),
        Err(ValidationError::InvalidDate { .. })
    ));
}

#[test]
fn test_sorted_views_do_not_reorder_storage() {
    let mut ledger = Ledger::new();
    // Inserted out of date order on purpose
    ledger
        .append(tx(date(2023, 10, 15), Category::Salary, Kind::Income, 30))
        .unwrap();
    ledger
        .append(tx(date(2023, 10, 1), Category::Rent, Kind::Expense, 10))
        .unwrap();
    ledger
        .append(tx(date(2023, 10, 8), Category::Groceries, Kind::Expense, 20))
        .unwrap();

    let desc: Vec<i64> = ledger.sorted_by_date(true).iter().map(|t| t.amount).collect();
    let asc: Vec<i64> = ledger.sorted_by_date(false).iter().map(|t| t.amount).collect();
    assert_eq!(desc, vec![30, 20, 10]);
    assert_eq!(asc, vec![10, 20, 30]);

    // Storage keeps insertion order
    let stored: Vec<i64> = ledger.all().iter().map(|t| t.amount).collect();
    assert_eq!(stored, vec![30, 10, 20]);
}

#[test]
fn test_sort_round_trip_loses_nothing() {
    let ledger = Ledger::sample();

    // Sort descending then ascending, twice; same set, no loss, no dupes
    let mut seen: Vec<Transaction> = ledger
        .sorted_by_date(true)
        .into_iter()
        .copied()
        .collect();
    seen = {
        let mut v = seen;
        v.sort_by(|a, b| a.date.cmp(&b.date));
        v
    };
    let asc: Vec<Transaction> = ledger.sorted_by_date(false).into_iter().copied().collect();
    assert_eq!(seen, asc);
    assert_eq!(asc.len(), ledger.len());
}

#[test]
fn test_sorted_by_date_is_stable_for_ties() {
    let mut ledger = Ledger::new();
    let d = date(2023, 11, 1);
    ledger
        .append(tx(d, Category::Salary, Kind::Income, 1))
        .unwrap();
    ledger
        .append(tx(d, Category::Rent, Kind::Expense, 2))
        .unwrap();

    // Same-date records keep insertion order in both directions
    let desc: Vec<i64> = ledger.sorted_by_date(true).iter().map(|t| t.amount).collect();
    let asc: Vec<i64> = ledger.sorted_by_date(false).iter().map(|t| t.amount).collect();
    assert_eq!(desc, vec![1, 2]);
    assert_eq!(asc, vec![1, 2]);
}
