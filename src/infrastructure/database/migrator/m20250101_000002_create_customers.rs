//! Create customers table
//!
//! Stores the guest contact profile plus the billing-provider
//! counterpart id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::FirstName).string().not_null())
                    .col(ColumnDef::new(Customers::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Customers::AddressCountry)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::AddressCity).string().not_null())
                    .col(
                        ColumnDef::new(Customers::AddressStreet)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::AddressNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::DateOfBirth).date().not_null())
                    .col(
                        ColumnDef::new(Customers::BillingCustomerId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customers_email")
                    .table(Customers::Table)
                    .col(Customers::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    AddressCountry,
    AddressCity,
    AddressStreet,
    AddressNumber,
    DateOfBirth,
    BillingCustomerId,
    CreatedAt,
}
