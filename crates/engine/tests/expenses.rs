use chrono::NaiveDate;
use sea_orm::Database;

use engine::{Engine, EngineError};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

async fn user(engine: &Engine, username: &str) -> String {
    engine.new_user(username, "hash").await.unwrap().user_id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn new_expense_resolves_category() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let groceries = engine.new_category(&alice, "Groceries", None).await.unwrap();

    let expense = engine
        .new_expense(&alice, 4250, "milk", date(2024, 1, 5), &groceries.external_id)
        .await
        .unwrap();

    assert!(!expense.external_id.is_empty());
    assert_eq!(expense.amount_minor, 4250);
    assert_eq!(expense.description, "milk");
    assert_eq!(expense.expense_date, date(2024, 1, 5));
    assert_eq!(expense.category_external_id, groceries.external_id);
    assert_eq!(expense.category_name, "Groceries");
}

#[tokio::test]
async fn foreign_category_reads_as_not_found() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;
    let groceries = engine.new_category(&alice, "Groceries", None).await.unwrap();

    let err = engine
        .new_expense(&bob, 100, "milk", date(2024, 1, 5), &groceries.external_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::CategoryNotFound(_)));

    // An absent category fails identically.
    let err = engine
        .new_expense(&alice, 100, "milk", date(2024, 1, 5), "no-such-category")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::CategoryNotFound(_)));
}

#[tokio::test]
async fn non_positive_amount_is_rejected() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let groceries = engine.new_category(&alice, "Groceries", None).await.unwrap();

    for amount in [0, -1] {
        let err = engine
            .new_expense(&alice, amount, "milk", date(2024, 1, 5), &groceries.external_id)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }
}

#[tokio::test]
async fn listing_is_idempotent_and_owner_scoped() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;

    let a_cat = engine.new_category(&alice, "Travel", None).await.unwrap();
    let b_cat = engine.new_category(&bob, "Rent", None).await.unwrap();
    engine
        .new_expense(&alice, 900, "train", date(2024, 2, 1), &a_cat.external_id)
        .await
        .unwrap();
    engine
        .new_expense(&bob, 120_000, "february", date(2024, 2, 1), &b_cat.external_id)
        .await
        .unwrap();

    let first = engine.expenses(&alice).await.unwrap();
    let second = engine.expenses(&alice).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].description, "train");
}

#[tokio::test]
async fn single_read_keeps_external_id_stable() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;
    let cat = engine.new_category(&alice, "Travel", None).await.unwrap();

    let created = engine
        .new_expense(&alice, 900, "train", date(2024, 2, 1), &cat.external_id)
        .await
        .unwrap();

    let read = engine.expense(&alice, &created.external_id).await.unwrap();
    assert_eq!(read, created);

    let err = engine
        .expense(&bob, &created.external_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn delete_is_owner_only_and_terminal() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;
    let groceries = engine.new_category(&alice, "Groceries", None).await.unwrap();

    let expense = engine
        .new_expense(&alice, 4250, "milk", date(2024, 1, 5), &groceries.external_id)
        .await
        .unwrap();

    // A non-owner cannot tell the expense exists, let alone delete it.
    let err = engine
        .delete_expense(&bob, &expense.external_id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("expense not exists".to_string())
    );
    assert_eq!(engine.expenses(&alice).await.unwrap().len(), 1);

    engine
        .delete_expense(&alice, &expense.external_id)
        .await
        .unwrap();
    assert!(engine.expenses(&alice).await.unwrap().is_empty());

    // Deletion is terminal.
    let err = engine
        .delete_expense(&alice, &expense.external_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn empty_description_is_rejected() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let cat = engine.new_category(&alice, "Travel", None).await.unwrap();

    let err = engine
        .new_expense(&alice, 100, "  ", date(2024, 2, 1), &cat.external_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}
