use sea_orm::{QueryFilter, TransactionTrait, prelude::*};

use crate::{
    CryptoHolding, FundHolding, ManualHolding, NewCryptoHolding, NewFundHolding, NewManualHolding,
    NewStockHolding, ResultEngine, StockHolding,
};

use super::{Engine, access, normalize_required_name, with_tx};

/// Generates the create/list pair for one holding kind.
///
/// Holding attributes are opaque to the engine beyond trimming the listed
/// naming fields; ownership assignment is the only cross-check.
macro_rules! impl_holding_ops {
    (
        $create_fn:ident,
        $list_fn:ident,
        $module:ident,
        $input:ty,
        $snapshot:ident,
        [$($field:ident),+ $(,)?]
    ) => {
        pub async fn $create_fn(
            &self,
            user_id: &str,
            mut input: $input,
        ) -> ResultEngine<$snapshot> {
            $(input.$field = normalize_required_name(&input.$field, stringify!($field))?;)+
            with_tx!(self, |db_tx| {
                let model = access::insert_with_external_id(&db_tx, |external_id| {
                    input.active_model(user_id, external_id)
                })
                .await?;
                Ok($snapshot::from(model))
            })
        }

        pub async fn $list_fn(&self, user_id: &str) -> ResultEngine<Vec<$snapshot>> {
            with_tx!(self, |db_tx| {
                let models = crate::$module::Entity::find()
                    .filter(crate::$module::Column::UserId.eq(user_id))
                    .all(&db_tx)
                    .await?;
                Ok(models.into_iter().map($snapshot::from).collect())
            })
        }
    };
}

impl Engine {
    impl_holding_ops!(
        new_stock_holding,
        stock_holdings,
        stock_holdings,
        NewStockHolding,
        StockHolding,
        [symbol, exchange]
    );

    impl_holding_ops!(
        new_crypto_holding,
        crypto_holdings,
        crypto_holdings,
        NewCryptoHolding,
        CryptoHolding,
        [coin_id, symbol]
    );

    impl_holding_ops!(
        new_fund_holding,
        fund_holdings,
        fund_holdings,
        NewFundHolding,
        FundHolding,
        [scheme_code]
    );

    impl_holding_ops!(
        new_manual_holding,
        manual_holdings,
        manual_holdings,
        NewManualHolding,
        ManualHolding,
        [asset_name, asset_type]
    );
}
