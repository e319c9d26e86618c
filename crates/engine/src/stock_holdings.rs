//! Equity holdings: stored purchase data only, no valuation.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Attributes supplied when recording a stock holding.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewStockHolding {
    pub symbol: String,
    pub exchange: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

impl NewStockHolding {
    pub(crate) fn active_model(&self, user_id: &str, external_id: String) -> ActiveModel {
        ActiveModel {
            external_id: ActiveValue::Set(external_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            symbol: ActiveValue::Set(self.symbol.clone()),
            exchange: ActiveValue::Set(self.exchange.clone()),
            quantity: ActiveValue::Set(self.quantity),
            purchase_price: ActiveValue::Set(self.purchase_price),
            purchase_date: ActiveValue::Set(self.purchase_date),
            ..Default::default()
        }
    }
}

/// Public snapshot of a stock holding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockHolding {
    pub external_id: String,
    pub symbol: String,
    pub exchange: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

impl From<Model> for StockHolding {
    fn from(model: Model) -> Self {
        Self {
            external_id: model.external_id,
            symbol: model.symbol,
            exchange: model.exchange,
            quantity: model.quantity,
            purchase_price: model.purchase_price,
            purchase_date: model.purchase_date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_holdings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub external_id: String,
    pub user_id: String,
    pub symbol: String,
    pub exchange: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
