//! Crypto holdings. `coin_id` is the upstream market-data identifier (e.g.
//! "bitcoin"); this engine stores it opaquely.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Attributes supplied when recording a crypto holding.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewCryptoHolding {
    pub coin_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

impl NewCryptoHolding {
    pub(crate) fn active_model(&self, user_id: &str, external_id: String) -> ActiveModel {
        ActiveModel {
            external_id: ActiveValue::Set(external_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            coin_id: ActiveValue::Set(self.coin_id.clone()),
            symbol: ActiveValue::Set(self.symbol.clone()),
            quantity: ActiveValue::Set(self.quantity),
            purchase_price: ActiveValue::Set(self.purchase_price),
            purchase_date: ActiveValue::Set(self.purchase_date),
            ..Default::default()
        }
    }
}

/// Public snapshot of a crypto holding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptoHolding {
    pub external_id: String,
    pub coin_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

impl From<Model> for CryptoHolding {
    fn from(model: Model) -> Self {
        Self {
            external_id: model.external_id,
            coin_id: model.coin_id,
            symbol: model.symbol,
            quantity: model.quantity,
            purchase_price: model.purchase_price,
            purchase_date: model.purchase_date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crypto_holdings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub external_id: String,
    pub user_id: String,
    pub coin_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub purchase_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
