use std::collections::HashMap;

use sea_orm::{
    ActiveValue, DatabaseTransaction, PaginatorTrait, QueryFilter, TransactionTrait, prelude::*,
};

use crate::{Category, EngineError, ResultEngine, categories};

use super::{Engine, access, normalize_required_name, with_tx};

impl Engine {
    /// Creates a category, optionally under a parent referenced by external
    /// id.
    ///
    /// The parent must exist and belong to the caller; anything else is
    /// [`EngineError::InvalidParent`]. A fresh category has no descendants,
    /// so creation cannot close a cycle and no ancestor walk happens here.
    pub async fn new_category(
        &self,
        user_id: &str,
        name: &str,
        parent_external_ref: Option<&str>,
    ) -> ResultEngine<Category> {
        let name = normalize_required_name(name, "category name")?;
        with_tx!(self, |db_tx| {
            let parent = match parent_external_ref {
                Some(reference) => Some(self.require_parent(&db_tx, reference, user_id).await?),
                None => None,
            };

            let model = access::insert_with_external_id(&db_tx, |external_id| {
                categories::ActiveModel {
                    external_id: ActiveValue::Set(external_id),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    name: ActiveValue::Set(name.clone()),
                    parent_id: ActiveValue::Set(parent.as_ref().map(|p| p.id)),
                    ..Default::default()
                }
            })
            .await?;

            Ok(Category::from_model(model, parent.map(|p| p.external_id)))
        })
    }

    /// Moves a category under a new parent, or to the root with `None`.
    ///
    /// Revalidates the same-owner invariant and walks the prospective
    /// ancestor chain: reparenting is the one operation that can close a
    /// cycle, and a cycle is rejected as [`EngineError::InvalidParent`].
    pub async fn set_category_parent(
        &self,
        user_id: &str,
        external_id: &str,
        parent_external_ref: Option<&str>,
    ) -> ResultEngine<Category> {
        with_tx!(self, |db_tx| {
            let child = self.require_category(&db_tx, external_id, user_id).await?;

            let parent = match parent_external_ref {
                Some(reference) => {
                    let parent = self.require_parent(&db_tx, reference, user_id).await?;
                    self.reject_cycle(&db_tx, &child, &parent).await?;
                    Some(parent)
                }
                None => None,
            };

            let active = categories::ActiveModel {
                id: ActiveValue::Set(child.id),
                parent_id: ActiveValue::Set(parent.as_ref().map(|p| p.id)),
                ..Default::default()
            };
            let model = active.update(&db_tx).await?;

            Ok(Category::from_model(model, parent.map(|p| p.external_id)))
        })
    }

    /// Lists the caller's categories. The query is scoped by owner, so no
    /// per-row guard applies.
    pub async fn categories(&self, user_id: &str) -> ResultEngine<Vec<Category>> {
        with_tx!(self, |db_tx| {
            let models = categories::Entity::find()
                .filter(categories::Column::UserId.eq(user_id))
                .all(&db_tx)
                .await?;

            // Parents always belong to the same owner, so one pass over the
            // owner's rows resolves every parent reference.
            let external_by_internal: HashMap<i64, String> = models
                .iter()
                .map(|model| (model.id, model.external_id.clone()))
                .collect();

            Ok(models
                .into_iter()
                .map(|model| {
                    let parent = model
                        .parent_id
                        .and_then(|id| external_by_internal.get(&id).cloned());
                    Category::from_model(model, parent)
                })
                .collect())
        })
    }

    /// Returns a single category by external id, through the ownership guard.
    pub async fn category(&self, user_id: &str, external_id: &str) -> ResultEngine<Category> {
        with_tx!(self, |db_tx| {
            let model = self.require_category(&db_tx, external_id, user_id).await?;
            let parent = self.parent_external_id(&db_tx, &model).await?;
            Ok(Category::from_model(model, parent))
        })
    }

    async fn parent_external_id(
        &self,
        db: &DatabaseTransaction,
        model: &categories::Model,
    ) -> ResultEngine<Option<String>> {
        let Some(parent_id) = model.parent_id else {
            return Ok(None);
        };
        let parent = categories::Entity::find_by_id(parent_id).one(db).await?;
        Ok(parent.map(|p| p.external_id))
    }

    /// Parent resolution for creation and reparenting. Absent and cross-owner
    /// both fail as `InvalidParent`, since here the failure blocks the write
    /// rather than denying direct access.
    async fn require_parent(
        &self,
        db: &DatabaseTransaction,
        reference: &str,
        user_id: &str,
    ) -> ResultEngine<categories::Model> {
        self.require_category(db, reference, user_id)
            .await
            .map_err(|err| match err {
                EngineError::KeyNotFound(_) => EngineError::InvalidParent(format!(
                    "unresolved parent category \"{reference}\""
                )),
                other => other,
            })
    }

    /// Bounded walk from `parent` upward; reaching `child` means the move
    /// would close a cycle.
    async fn reject_cycle(
        &self,
        db: &DatabaseTransaction,
        child: &categories::Model,
        parent: &categories::Model,
    ) -> ResultEngine<()> {
        if parent.id == child.id {
            return Err(EngineError::InvalidParent(
                "category cannot be its own parent".to_string(),
            ));
        }

        // The chain cannot be longer than the owner's category count;
        // exceeding it means the stored tree is already inconsistent.
        let bound = categories::Entity::find()
            .filter(categories::Column::UserId.eq(child.user_id.as_str()))
            .count(db)
            .await?;

        let mut cursor = parent.parent_id;
        let mut steps: u64 = 0;
        while let Some(ancestor_id) = cursor {
            if ancestor_id == child.id {
                return Err(EngineError::InvalidParent(format!(
                    "moving \"{}\" under \"{}\" would create a cycle",
                    child.name, parent.name
                )));
            }
            steps += 1;
            if steps > bound {
                return Err(EngineError::InvalidParent(
                    "category parent chain does not terminate".to_string(),
                ));
            }
            cursor = categories::Entity::find_by_id(ancestor_id)
                .one(db)
                .await?
                .and_then(|model| model.parent_id);
        }
        Ok(())
    }
}
