use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_products_table::Migration),
            Box::new(m20240101_000002_create_tax_rates_table::Migration),
            Box::new(m20240101_000003_create_transactions_table::Migration),
            Box::new(m20240101_000004_create_transaction_details_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_products_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::Code)
                                .string_len(13)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Products::Name).string_len(50).not_null())
                        .col(ColumnDef::new(Products::Price).big_integer().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_code")
                        .table(Products::Table)
                        .col(Products::Code)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        Code,
        Name,
        Price,
    }
}

mod m20240101_000002_create_tax_rates_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_tax_rates_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TaxRates::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TaxRates::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TaxRates::Code)
                                .string_len(2)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(TaxRates::Name).string_len(20).not_null())
                        .col(
                            ColumnDef::new(TaxRates::Rate)
                                .decimal_len(5, 4)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TaxRates::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TaxRates {
        Table,
        Id,
        Code,
        Name,
        Rate,
    }
}

mod m20240101_000003_create_transactions_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_transactions_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Transactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Transactions::Id)
                                .big_integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::RecordedAt)
                                .date_time()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::EmpCd)
                                .string_len(10)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::StoreCd)
                                .string_len(5)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::PosNo)
                                .string_len(3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::TotalAmount)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Transactions::TotalAmountExTax)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_transactions_recorded_at")
                        .table(Transactions::Table)
                        .col(Transactions::RecordedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Transactions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Transactions {
        Table,
        Id,
        RecordedAt,
        EmpCd,
        StoreCd,
        PosNo,
        TotalAmount,
        TotalAmountExTax,
    }
}

mod m20240101_000004_create_transaction_details_table {
    use sea_orm_migration::prelude::*;

    use super::m20240101_000001_create_products_table::Products;
    use super::m20240101_000003_create_transactions_table::Transactions;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_transaction_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TransactionDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TransactionDetails::TransactionId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::LineNo)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::ProductId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::ProductCode)
                                .string_len(13)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::ProductName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::UnitPrice)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionDetails::TaxCode)
                                .string_len(2)
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(TransactionDetails::TransactionId)
                                .col(TransactionDetails::LineNo),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transaction_details_transaction_id")
                                .from(
                                    TransactionDetails::Table,
                                    TransactionDetails::TransactionId,
                                )
                                .to(Transactions::Table, Transactions::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transaction_details_product_id")
                                .from(TransactionDetails::Table, TransactionDetails::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_transaction_details_transaction_id")
                        .table(TransactionDetails::Table)
                        .col(TransactionDetails::TransactionId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TransactionDetails::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TransactionDetails {
        Table,
        TransactionId,
        LineNo,
        ProductId,
        ProductCode,
        ProductName,
        UnitPrice,
        TaxCode,
    }
}
