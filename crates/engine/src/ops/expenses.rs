use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, ModelTrait, QueryFilter, TransactionTrait, prelude::*};

use crate::{EngineError, Expense, ResultEngine, categories, expenses};

use super::{Engine, access, normalize_required_name, with_tx};

impl Engine {
    /// Records an expense against one of the caller's categories.
    ///
    /// `category_ref` is the category's external id; the resolved internal
    /// key is what gets stored. The ownership rule applies to the referenced
    /// resource too: an absent or cross-owner category fails as
    /// [`EngineError::CategoryNotFound`].
    pub async fn new_expense(
        &self,
        user_id: &str,
        amount_minor: i64,
        description: &str,
        expense_date: NaiveDate,
        category_ref: &str,
    ) -> ResultEngine<Expense> {
        if amount_minor <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount_minor must be > 0".to_string(),
            ));
        }
        let description = normalize_required_name(description, "expense description")?;

        with_tx!(self, |db_tx| {
            let category = self
                .require_category(&db_tx, category_ref, user_id)
                .await
                .map_err(|err| match err {
                    EngineError::KeyNotFound(_) => EngineError::CategoryNotFound(format!(
                        "category \"{category_ref}\" not found"
                    )),
                    other => other,
                })?;

            let model = access::insert_with_external_id(&db_tx, |external_id| {
                expenses::ActiveModel {
                    external_id: ActiveValue::Set(external_id),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    amount_minor: ActiveValue::Set(amount_minor),
                    description: ActiveValue::Set(description.clone()),
                    expense_date: ActiveValue::Set(expense_date),
                    category_id: ActiveValue::Set(category.id),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
            })
            .await?;

            Ok(Expense::from_parts(model, &category))
        })
    }

    /// Lists the caller's expenses with their categories resolved.
    pub async fn expenses(&self, user_id: &str) -> ResultEngine<Vec<Expense>> {
        with_tx!(self, |db_tx| {
            let rows: Vec<(expenses::Model, Option<categories::Model>)> = expenses::Entity::find()
                .filter(expenses::Column::UserId.eq(user_id))
                .find_also_related(categories::Entity)
                .all(&db_tx)
                .await?;

            let mut out = Vec::with_capacity(rows.len());
            for (model, category) in rows {
                let category = category.ok_or_else(|| {
                    EngineError::KeyNotFound("category not exists".to_string())
                })?;
                out.push(Expense::from_parts(model, &category));
            }
            Ok(out)
        })
    }

    /// Returns a single expense by external id, through the ownership guard.
    pub async fn expense(&self, user_id: &str, external_id: &str) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            let model = self.require_expense(&db_tx, external_id, user_id).await?;
            let category = categories::Entity::find_by_id(model.category_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("category not exists".to_string()))?;
            Ok(Expense::from_parts(model, &category))
        })
    }

    /// Deletes an expense. Terminal: a second delete is `KeyNotFound`, and so
    /// is any attempt by a non-owner.
    pub async fn delete_expense(&self, user_id: &str, external_id: &str) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = self.require_expense(&db_tx, external_id, user_id).await?;
            model.delete(&db_tx).await?;
            Ok(())
        })
    }
}
