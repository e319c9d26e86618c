//! Expense records.
//!
//! Lifecycle is create → delete; amounts and dates are never edited in
//! place. Amounts are minor units of the account currency.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::categories;

/// Public snapshot of an expense, with its category resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub external_id: String,
    pub amount_minor: i64,
    pub description: String,
    pub expense_date: Date,
    pub category_external_id: String,
    pub category_name: String,
    pub created_at: DateTimeUtc,
}

impl Expense {
    pub(crate) fn from_parts(model: Model, category: &categories::Model) -> Self {
        Self {
            external_id: model.external_id,
            amount_minor: model.amount_minor,
            description: model.description,
            expense_date: model.expense_date,
            category_external_id: category.external_id.clone(),
            category_name: category.name.clone(),
            created_at: model.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub external_id: String,
    pub user_id: String,
    pub amount_minor: i64,
    pub description: String,
    pub expense_date: Date,
    pub category_id: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
