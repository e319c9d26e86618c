//! Credential store rows: username → password hash plus the stable user id
//! the rest of the suite keys ownership on.
//!
//! The hash is opaque material produced upstream; the engine stores and
//! returns it without ever interpreting it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Public snapshot of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
