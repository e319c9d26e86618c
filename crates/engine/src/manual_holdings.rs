//! Manually entered assets (gold, real estate, anything without a market
//! feed). Both invested and current values are caller-supplied.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Attributes supplied when recording a manual asset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewManualHolding {
    pub asset_name: String,
    pub asset_type: String,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub purchase_date: Date,
}

impl NewManualHolding {
    pub(crate) fn active_model(&self, user_id: &str, external_id: String) -> ActiveModel {
        ActiveModel {
            external_id: ActiveValue::Set(external_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            asset_name: ActiveValue::Set(self.asset_name.clone()),
            asset_type: ActiveValue::Set(self.asset_type.clone()),
            invested_value: ActiveValue::Set(self.invested_value),
            current_value: ActiveValue::Set(self.current_value),
            purchase_date: ActiveValue::Set(self.purchase_date),
            ..Default::default()
        }
    }
}

/// Public snapshot of a manual asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualHolding {
    pub external_id: String,
    pub asset_name: String,
    pub asset_type: String,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub purchase_date: Date,
}

impl From<Model> for ManualHolding {
    fn from(model: Model) -> Self {
        Self {
            external_id: model.external_id,
            asset_name: model.asset_name,
            asset_type: model.asset_type,
            invested_value: model.invested_value,
            current_value: model.current_value,
            purchase_date: model.purchase_date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manual_holdings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub external_id: String,
    pub user_id: String,
    pub asset_name: String,
    pub asset_type: String,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub purchase_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
