//! Initial schema migration - creates all tables from scratch.
//!
//! Complete schema for Coffers:
//!
//! - `users`: credential store (username → hash + stable user id)
//! - `categories`: per-owner expense category tree
//! - `expenses`: expense records referencing a category
//! - `stock_holdings` / `crypto_holdings` / `fund_holdings` /
//!   `manual_holdings`: the four portfolio holding kinds
//!
//! Every resource table pairs an autoincrement surrogate key with an
//! `external_id` column under a unique index; the index is the storage-level
//! backstop for external-identifier uniqueness.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    UserId,
    Username,
    PasswordHash,
    CreatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    ExternalId,
    UserId,
    Name,
    ParentId,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    ExternalId,
    UserId,
    AmountMinor,
    Description,
    ExpenseDate,
    CategoryId,
    CreatedAt,
}

#[derive(Iden)]
enum StockHoldings {
    Table,
    Id,
    ExternalId,
    UserId,
    Symbol,
    Exchange,
    Quantity,
    PurchasePrice,
    PurchaseDate,
}

#[derive(Iden)]
enum CryptoHoldings {
    Table,
    Id,
    ExternalId,
    UserId,
    CoinId,
    Symbol,
    Quantity,
    PurchasePrice,
    PurchaseDate,
}

#[derive(Iden)]
enum FundHoldings {
    Table,
    Id,
    ExternalId,
    UserId,
    SchemeCode,
    Quantity,
    PurchasePrice,
    PurchaseDate,
}

#[derive(Iden)]
enum ManualHoldings {
    Table,
    Id,
    ExternalId,
    UserId,
    AssetName,
    AssetType,
    InvestedValue,
    CurrentValue,
    PurchaseDate,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::UserId).string().not_null())
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-user_id-unique")
                    .table(Users::Table)
                    .col(Users::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-username-unique")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::ExternalId).string().not_null())
                    .col(ColumnDef::new(Categories::UserId).string().not_null())
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::ParentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-user_id")
                            .from(Categories::Table, Categories::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-parent_id")
                            .from(Categories::Table, Categories::ParentId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-categories-external_id-unique")
                    .table(Categories::Table)
                    .col(Categories::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Expenses
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::ExternalId).string().not_null())
                    .col(ColumnDef::new(Expenses::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::Description).string().not_null())
                    .col(ColumnDef::new(Expenses::ExpenseDate).date().not_null())
                    .col(ColumnDef::new(Expenses::CategoryId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-user_id")
                            .from(Expenses::Table, Expenses::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-category_id")
                            .from(Expenses::Table, Expenses::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-external_id-unique")
                    .table(Expenses::Table)
                    .col(Expenses::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Holdings (four kinds)
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(StockHoldings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockHoldings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockHoldings::ExternalId).string().not_null())
                    .col(ColumnDef::new(StockHoldings::UserId).string().not_null())
                    .col(ColumnDef::new(StockHoldings::Symbol).string().not_null())
                    .col(ColumnDef::new(StockHoldings::Exchange).string().not_null())
                    .col(ColumnDef::new(StockHoldings::Quantity).decimal().not_null())
                    .col(
                        ColumnDef::new(StockHoldings::PurchasePrice)
                            .decimal()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockHoldings::PurchaseDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-stock_holdings-user_id")
                            .from(StockHoldings::Table, StockHoldings::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_holdings-external_id-unique")
                    .table(StockHoldings::Table)
                    .col(StockHoldings::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CryptoHoldings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CryptoHoldings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CryptoHoldings::ExternalId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CryptoHoldings::UserId).string().not_null())
                    .col(ColumnDef::new(CryptoHoldings::CoinId).string().not_null())
                    .col(ColumnDef::new(CryptoHoldings::Symbol).string().not_null())
                    .col(ColumnDef::new(CryptoHoldings::Quantity).decimal().not_null())
                    .col(
                        ColumnDef::new(CryptoHoldings::PurchasePrice)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CryptoHoldings::PurchaseDate)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-crypto_holdings-user_id")
                            .from(CryptoHoldings::Table, CryptoHoldings::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-crypto_holdings-external_id-unique")
                    .table(CryptoHoldings::Table)
                    .col(CryptoHoldings::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FundHoldings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FundHoldings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FundHoldings::ExternalId).string().not_null())
                    .col(ColumnDef::new(FundHoldings::UserId).string().not_null())
                    .col(ColumnDef::new(FundHoldings::SchemeCode).string().not_null())
                    .col(ColumnDef::new(FundHoldings::Quantity).decimal().not_null())
                    .col(
                        ColumnDef::new(FundHoldings::PurchasePrice)
                            .decimal()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FundHoldings::PurchaseDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fund_holdings-user_id")
                            .from(FundHoldings::Table, FundHoldings::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-fund_holdings-external_id-unique")
                    .table(FundHoldings::Table)
                    .col(FundHoldings::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ManualHoldings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ManualHoldings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ManualHoldings::ExternalId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ManualHoldings::UserId).string().not_null())
                    .col(ColumnDef::new(ManualHoldings::AssetName).string().not_null())
                    .col(ColumnDef::new(ManualHoldings::AssetType).string().not_null())
                    .col(
                        ColumnDef::new(ManualHoldings::InvestedValue)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ManualHoldings::CurrentValue)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ManualHoldings::PurchaseDate)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-manual_holdings-user_id")
                            .from(ManualHoldings::Table, ManualHoldings::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-manual_holdings-external_id-unique")
                    .table(ManualHoldings::Table)
                    .col(ManualHoldings::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManualHoldings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FundHoldings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CryptoHoldings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StockHoldings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
