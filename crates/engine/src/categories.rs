//! Expense categories: a per-owner tree linked by parent references.
//!
//! `parent_id` stores the parent's internal key; callers only ever see
//! external ids.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Public snapshot of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub external_id: String,
    pub name: String,
    pub parent_external_id: Option<String>,
}

impl Category {
    pub(crate) fn from_model(model: Model, parent_external_id: Option<String>) -> Self {
        Self {
            external_id: model.external_id,
            name: model.name,
            parent_external_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub external_id: String,
    pub user_id: String,
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Parent,
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
