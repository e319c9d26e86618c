use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, User, users};

use super::{Engine, access, normalize_required_name, with_tx};

impl Engine {
    /// Creates a user with a freshly allocated stable id.
    ///
    /// `password_hash` is opaque credential material hashed upstream; the
    /// engine stores it verbatim and never interprets it.
    pub async fn new_user(&self, username: &str, password_hash: &str) -> ResultEngine<User> {
        self.insert_user(None, username, password_hash).await
    }

    /// Creates a user with a caller-supplied stable id.
    ///
    /// For well-known fixed identities agreed across services, such as
    /// [`crate::ADMIN_USER_ID`]: the id is injected instead of allocated and
    /// must not already exist.
    pub async fn new_user_with_id(
        &self,
        user_id: &str,
        username: &str,
        password_hash: &str,
    ) -> ResultEngine<User> {
        self.insert_user(Some(user_id), username, password_hash)
            .await
    }

    /// Looks up a user by username, for the upstream authentication layer.
    pub async fn user_by_username(&self, username: &str) -> ResultEngine<User> {
        with_tx!(self, |db_tx| {
            let model = users::Entity::find()
                .filter(users::Column::Username.eq(username))
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))?;
            Ok(User::from(model))
        })
    }

    async fn insert_user(
        &self,
        fixed_id: Option<&str>,
        username: &str,
        password_hash: &str,
    ) -> ResultEngine<User> {
        let username = normalize_required_name(username, "username")?;
        with_tx!(self, |db_tx| {
            let taken = users::Entity::find()
                .filter(users::Column::Username.eq(username.as_str()))
                .one(&db_tx)
                .await?
                .is_some();
            if taken {
                return Err(EngineError::ExistingKey(username.clone()));
            }
            if let Some(user_id) = fixed_id {
                let exists = users::Entity::find()
                    .filter(users::Column::UserId.eq(user_id))
                    .one(&db_tx)
                    .await?
                    .is_some();
                if exists {
                    return Err(EngineError::ExistingKey(user_id.to_string()));
                }
            }

            let build = |user_id: String| users::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                username: ActiveValue::Set(username.clone()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };

            let model = match fixed_id {
                Some(user_id) => build(user_id.to_string()).insert(&db_tx).await?,
                None => access::insert_with_external_id(&db_tx, build).await?,
            };
            Ok(User::from(model))
        })
    }
}
