use sea_orm::Database;
use uuid::Uuid;

use engine::{ADMIN_USER_ID, Engine, EngineError};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

#[tokio::test]
async fn new_user_allocates_a_stable_id() {
    let engine = engine_with_db().await;

    let created = engine.new_user("alice", "hash-a").await.unwrap();
    assert!(Uuid::parse_str(&created.user_id).is_ok());
    assert_eq!(created.username, "alice");

    let found = engine.user_by_username("alice").await.unwrap();
    assert_eq!(found.user_id, created.user_id);
    assert_eq!(found.password_hash, "hash-a");
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let engine = engine_with_db().await;

    engine.new_user("alice", "hash-a").await.unwrap();
    let err = engine.new_user("alice", "hash-b").await.unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("alice".to_string()));
}

#[tokio::test]
async fn unknown_username_is_not_found() {
    let engine = engine_with_db().await;

    let err = engine.user_by_username("nobody").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("user not exists".to_string()));
}

#[tokio::test]
async fn fixed_id_user_keeps_the_supplied_id() {
    let engine = engine_with_db().await;
    let fixed = "00000000-0000-0000-0000-000000000001";

    let service = engine
        .new_user_with_id(fixed, "reporting", "hash")
        .await
        .unwrap();
    assert_eq!(service.user_id, fixed);

    let found = engine.user_by_username("reporting").await.unwrap();
    assert_eq!(found.user_id, fixed);

    // The fixed id is as unique as an allocated one.
    let err = engine
        .new_user_with_id(fixed, "reporting2", "hash")
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey(fixed.to_string()));
}

#[tokio::test]
async fn migrations_seed_the_admin_identity() {
    let engine = engine_with_db().await;

    // Running the migrations is enough: no settings, no app bootstrap.
    let admin = engine.user_by_username("admin").await.unwrap();
    assert_eq!(admin.user_id, ADMIN_USER_ID);
    assert!(!admin.password_hash.is_empty());

    // The well-known id is taken from the start.
    let err = engine
        .new_user_with_id(ADMIN_USER_ID, "admin2", "hash")
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey(ADMIN_USER_ID.to_string()));
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let engine = engine_with_db().await;

    let err = engine.new_user("   ", "hash").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}
