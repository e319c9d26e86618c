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

#[tokio::test]
async fn new_category_without_parent() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;

    let category = engine.new_category(&alice, "Groceries", None).await.unwrap();

    assert!(!category.external_id.is_empty());
    assert_eq!(category.name, "Groceries");
    assert_eq!(category.parent_external_id, None);

    let listed = engine.categories(&alice).await.unwrap();
    assert_eq!(listed, vec![category]);
}

#[tokio::test]
async fn new_category_with_parent_links_by_external_id() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;

    let parent = engine.new_category(&alice, "Food", None).await.unwrap();
    let child = engine
        .new_category(&alice, "Groceries", Some(&parent.external_id))
        .await
        .unwrap();

    assert_eq!(
        child.parent_external_id.as_deref(),
        Some(parent.external_id.as_str())
    );

    // The list resolves parents the same way.
    let listed = engine.categories(&alice).await.unwrap();
    let listed_child = listed
        .iter()
        .find(|c| c.external_id == child.external_id)
        .unwrap();
    assert_eq!(
        listed_child.parent_external_id.as_deref(),
        Some(parent.external_id.as_str())
    );
}

#[tokio::test]
async fn unresolved_parent_is_invalid() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;

    let err = engine
        .new_category(&alice, "Groceries", Some("no-such-category"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParent(_)));
}

#[tokio::test]
async fn cross_owner_parent_is_invalid() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;

    let parent = engine.new_category(&alice, "Food", None).await.unwrap();

    let err = engine
        .new_category(&bob, "Groceries", Some(&parent.external_id))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParent(_)));
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;

    let err = engine.new_category(&alice, "   ", None).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

#[tokio::test]
async fn single_read_is_owner_scoped() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;

    let category = engine.new_category(&alice, "Travel", None).await.unwrap();

    // Cross-owner read is indistinguishable from a missing resource.
    let err = engine
        .category(&bob, &category.external_id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    // Re-reading as the owner returns the same stable external id.
    let read = engine
        .category(&alice, &category.external_id)
        .await
        .unwrap();
    assert_eq!(read.external_id, category.external_id);
}

#[tokio::test]
async fn list_is_scoped_by_owner() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;

    engine.new_category(&alice, "Travel", None).await.unwrap();
    engine.new_category(&bob, "Rent", None).await.unwrap();

    let alice_names: Vec<String> = engine
        .categories(&alice)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(alice_names, vec!["Travel".to_string()]);
}

#[tokio::test]
async fn reparent_moves_and_revalidates() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;
    let bob = user(&engine, "bob").await;

    let food = engine.new_category(&alice, "Food", None).await.unwrap();
    let groceries = engine.new_category(&alice, "Groceries", None).await.unwrap();

    let moved = engine
        .set_category_parent(&alice, &groceries.external_id, Some(&food.external_id))
        .await
        .unwrap();
    assert_eq!(
        moved.parent_external_id.as_deref(),
        Some(food.external_id.as_str())
    );

    // A cross-owner parent fails the same way it does at creation.
    let foreign = engine.new_category(&bob, "Rent", None).await.unwrap();
    let err = engine
        .set_category_parent(&alice, &groceries.external_id, Some(&foreign.external_id))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParent(_)));

    // Back to the root.
    let rooted = engine
        .set_category_parent(&alice, &groceries.external_id, None)
        .await
        .unwrap();
    assert_eq!(rooted.parent_external_id, None);
}

#[tokio::test]
async fn reparent_rejects_cycles() {
    let engine = engine_with_db().await;
    let alice = user(&engine, "alice").await;

    let a = engine.new_category(&alice, "A", None).await.unwrap();
    let b = engine
        .new_category(&alice, "B", Some(&a.external_id))
        .await
        .unwrap();
    let c = engine
        .new_category(&alice, "C", Some(&b.external_id))
        .await
        .unwrap();

    // a → b → c; moving a under c would close the loop.
    let err = engine
        .set_category_parent(&alice, &a.external_id, Some(&c.external_id))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParent(_)));

    // Self-parenting is the degenerate cycle.
    let err = engine
        .set_category_parent(&alice, &a.external_id, Some(&a.external_id))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidParent(_)));
}
