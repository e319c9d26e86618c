//! Demo data for the well-known admin identity.
//!
//! The admin user itself is inserted by the migrations; this step only adds
//! demo holdings so a fresh database has something to show. Every service
//! that seeds data for the admin account uses the same fixed user id
//! ([`ADMIN_USER_ID`]), so resources created here are attributed to the
//! identity the rest of the suite agrees on.

use chrono::Utc;
use engine::{
    ADMIN_USER_ID, Engine, EngineError, NewCryptoHolding, NewFundHolding, NewManualHolding,
    NewStockHolding,
};
use rust_decimal::Decimal;

pub async fn run(engine: &Engine) -> Result<(), EngineError> {
    if !engine.stock_holdings(ADMIN_USER_ID).await?.is_empty() {
        tracing::info!("demo data already present for admin user, skipping");
        return Ok(());
    }

    tracing::info!("seeding demo holdings for admin user");
    let today = Utc::now().date_naive();

    engine
        .new_stock_holding(
            ADMIN_USER_ID,
            NewStockHolding {
                symbol: "AAPL".to_string(),
                exchange: "NASDAQ".to_string(),
                quantity: Decimal::new(10, 0),
                purchase_price: Decimal::new(15_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    engine
        .new_stock_holding(
            ADMIN_USER_ID,
            NewStockHolding {
                symbol: "TSLA".to_string(),
                exchange: "NASDAQ".to_string(),
                quantity: Decimal::new(5, 0),
                purchase_price: Decimal::new(20_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    engine
        .new_crypto_holding(
            ADMIN_USER_ID,
            NewCryptoHolding {
                coin_id: "bitcoin".to_string(),
                symbol: "BTC".to_string(),
                quantity: Decimal::new(5, 1),
                purchase_price: Decimal::new(3_000_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    engine
        .new_fund_holding(
            ADMIN_USER_ID,
            NewFundHolding {
                scheme_code: "120503".to_string(),
                quantity: Decimal::new(100, 0),
                purchase_price: Decimal::new(2_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    engine
        .new_manual_holding(
            ADMIN_USER_ID,
            NewManualHolding {
                asset_name: "Physical Gold".to_string(),
                asset_type: "Gold".to_string(),
                invested_value: Decimal::new(25_000_000, 2),
                current_value: Decimal::new(30_000_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    engine
        .new_manual_holding(
            ADMIN_USER_ID,
            NewManualHolding {
                asset_name: "Real Estate Plot".to_string(),
                asset_type: "Real Estate".to_string(),
                invested_value: Decimal::new(50_000_000, 2),
                current_value: Decimal::new(55_000_000, 2),
                purchase_date: today,
            },
        )
        .await?;

    tracing::info!("demo data seeding complete for user {ADMIN_USER_ID}");
    Ok(())
}
