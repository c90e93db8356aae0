use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create addresses table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Addresses::UserId).uuid().not_null())
                    .col(ColumnDef::new(Addresses::FirstName).string().not_null())
                    .col(optional_text(Addresses::LastName))
                    .col(optional_text(Addresses::Email))
                    .col(optional_text(Addresses::Phone))
                    .col(ColumnDef::new(Addresses::AddressLine1).string().not_null())
                    .col(optional_text(Addresses::AddressLine2))
                    .col(optional_text(Addresses::City))
                    .col(optional_text(Addresses::State))
                    .col(optional_text(Addresses::Country))
                    .col(optional_text(Addresses::Pincode))
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Addresses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Addresses::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_user_id")
                            .from(Addresses::Table, Addresses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_addresses_user_id
                ON addresses (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_addresses_email
                ON addresses (email);
                "#,
            )
            .await?;

        // Listing and export read the owner's live rows newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_addresses_owner_created_at
                ON addresses (user_id, created_at DESC)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_addresses_updated_at
                BEFORE UPDATE ON addresses
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_addresses_updated_at ON addresses;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_addresses_user_id;
                DROP INDEX IF EXISTS idx_addresses_email;
                DROP INDEX IF EXISTS idx_addresses_owner_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

/// Optional contact columns store absence as the empty string.
fn optional_text(column: Addresses) -> ColumnDef {
    ColumnDef::new(column)
        .string()
        .not_null()
        .default("")
        .to_owned()
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    Phone,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Country,
    Pincode,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
