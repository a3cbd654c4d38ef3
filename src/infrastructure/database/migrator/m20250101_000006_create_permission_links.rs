//! Create employee/admin ↔ permission link tables

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_employees::Employees;
use super::m20250101_000004_create_admins::Admins;
use super::m20250101_000005_create_permissions::Permissions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeePermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeePermissions::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeePermissions::PermissionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeePermissions::EmployeeId)
                            .col(EmployeePermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_permissions_employee")
                            .from(EmployeePermissions::Table, EmployeePermissions::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_permissions_permission")
                            .from(
                                EmployeePermissions::Table,
                                EmployeePermissions::PermissionId,
                            )
                            .to(Permissions::Table, Permissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminPermissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AdminPermissions::AdminId).uuid().not_null())
                    .col(
                        ColumnDef::new(AdminPermissions::PermissionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AdminPermissions::AdminId)
                            .col(AdminPermissions::PermissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_permissions_admin")
                            .from(AdminPermissions::Table, AdminPermissions::AdminId)
                            .to(Admins::Table, Admins::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_permissions_permission")
                            .from(AdminPermissions::Table, AdminPermissions::PermissionId)
                            .to(Permissions::Table, Permissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeePermissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminPermissions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EmployeePermissions {
    Table,
    EmployeeId,
    PermissionId,
}

#[derive(Iden)]
pub enum AdminPermissions {
    Table,
    AdminId,
    PermissionId,
}
