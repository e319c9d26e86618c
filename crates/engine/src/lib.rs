//! Ownership-scoped core of the Coffers suite: credential store, expense
//! tracker with hierarchical categories, and portfolio holdings.
//!
//! Every resource carries an opaque external id (the public handle) next to
//! its internal surrogate key (never exposed), and every single-resource
//! operation passes through the ownership guard before touching the row.

pub use categories::Category;
pub use crypto_holdings::{CryptoHolding, NewCryptoHolding};
pub use error::EngineError;
pub use expenses::Expense;
pub use fund_holdings::{FundHolding, NewFundHolding};
pub use manual_holdings::{ManualHolding, NewManualHolding};
pub use ops::{Engine, EngineBuilder};
pub use stock_holdings::{NewStockHolding, StockHolding};
pub use users::User;

mod categories;
mod crypto_holdings;
mod error;
mod expenses;
mod fund_holdings;
mod manual_holdings;
mod ops;
mod stock_holdings;
mod users;

/// Stable identity of the default administrative account.
///
/// Agreed across every service that seeds data for that account: referenced
/// by value, never regenerated.
pub const ADMIN_USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

type ResultEngine<T> = Result<T, EngineError>;
