//! Seeds the well-known admin identity.
//!
//! The id and username are fixed values every service in the suite agrees
//! on; the insert is a no-op when the row already exists.

use sea_orm_migration::prelude::*;

const ADMIN_USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
// bcrypt of the default "password" credential; rotated upstream, never here
const ADMIN_PASSWORD_HASH: &str = "$2a$10$GRLdNijSQMUvl/au9ofL.eDwmoohzzS7.rmNSJZ.0FxO/BTk76klW";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    UserId,
    Username,
    PasswordHash,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Users::Table)
            .columns([
                Users::UserId,
                Users::Username,
                Users::PasswordHash,
                Users::CreatedAt,
            ])
            .values_panic([
                ADMIN_USER_ID.into(),
                "admin".into(),
                ADMIN_PASSWORD_HASH.into(),
                "2026-08-20T00:00:00+00:00".into(),
            ])
            .on_conflict(OnConflict::column(Users::UserId).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::UserId).eq(ADMIN_USER_ID))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
