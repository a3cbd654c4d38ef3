//! Create invoices table

use sea_orm_migration::prelude::*;

use super::m20250101_000008_create_reservations::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoices::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoices::ReservationId).uuid().not_null())
                    .col(ColumnDef::new(Invoices::PaymentMethod).string().not_null())
                    .col(
                        ColumnDef::new(Invoices::SubtotalCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoices::TaxCents).big_integer().not_null())
                    .col(
                        ColumnDef::new(Invoices::BillingPaymentIntentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Invoices::IssuedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_reservation")
                            .from(Invoices::Table, Invoices::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoices_reservation")
                    .table(Invoices::Table)
                    .col(Invoices::ReservationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Invoices {
    Table,
    Id,
    ReservationId,
    PaymentMethod,
    SubtotalCents,
    TaxCents,
    BillingPaymentIntentId,
    IssuedAt,
}
