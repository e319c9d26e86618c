//! The ownership guard and external-identifier allocation.
//!
//! Internal surrogate keys never cross the API boundary: resources are
//! addressed by their external id, and every single-resource lookup resolves
//! through [`require_owned`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr,
    IntoActiveModel, QueryFilter, SqlErr, prelude::*,
};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

use super::Engine;

/// How many times a creation retries with a freshly generated external id
/// after a unique-constraint collision before giving up.
const EXTERNAL_ID_ATTEMPTS: u32 = 3;

/// A resource recorded against an owning user identity.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

macro_rules! impl_owned {
    ($($module:ident),+ $(,)?) => {
        $(impl Owned for crate::$module::Model {
            fn owner_id(&self) -> &str {
                &self.user_id
            }
        })+
    };
}

impl_owned!(
    categories,
    crypto_holdings,
    expenses,
    fund_holdings,
    manual_holdings,
    stock_holdings,
);

/// The access decision applied before any single-resource read, update or
/// delete: the row must exist and belong to the caller.
///
/// Absent and cross-owner are indistinguishable from the outside; the
/// distinction is only logged.
pub(super) fn require_owned<M: Owned>(
    found: Option<M>,
    user_id: &str,
    label: &str,
) -> ResultEngine<M> {
    match found {
        Some(model) if model.owner_id() == user_id => Ok(model),
        Some(_) => {
            tracing::debug!(entity = label, "lookup denied: owner mismatch");
            Err(EngineError::KeyNotFound(format!("{label} not exists")))
        }
        None => Err(EngineError::KeyNotFound(format!("{label} not exists"))),
    }
}

/// Generates a guarded lookup-by-external-id method for a resource entity.
macro_rules! impl_owned_lookup {
    ($fn_name:ident, $module:ident, $label:literal) => {
        pub(super) async fn $fn_name(
            &self,
            db: &DatabaseTransaction,
            external_id: &str,
            user_id: &str,
        ) -> ResultEngine<crate::$module::Model> {
            let found = crate::$module::Entity::find()
                .filter(crate::$module::Column::ExternalId.eq(external_id))
                .one(db)
                .await?;
            require_owned(found, user_id, $label)
        }
    };
}

impl Engine {
    impl_owned_lookup!(require_category, categories, "category");
    impl_owned_lookup!(require_expense, expenses, "expense");
}

/// Allocates an external id and inserts the row, regenerating the id on a
/// unique-constraint collision. Exhausted retries surface as
/// [`EngineError::DuplicateId`]; anything past the retry budget is a
/// systemic storage fault, not a caller error.
pub(super) async fn insert_with_external_id<C, A, F>(
    db: &C,
    build: F,
) -> ResultEngine<<A::Entity as EntityTrait>::Model>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    F: Fn(String) -> A,
{
    for _ in 0..EXTERNAL_ID_ATTEMPTS {
        let external_id = Uuid::new_v4().to_string();
        match build(external_id).insert(db).await {
            Ok(model) => return Ok(model),
            Err(err) if is_unique_violation(&err) => {
                tracing::warn!("external id collision on insert, regenerating");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(EngineError::DuplicateId(
        "external id allocation retries exhausted".to_string(),
    ))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
