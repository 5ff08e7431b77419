use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ContactInfo::Type).text().not_null())
                    .col(ColumnDef::new(ContactInfo::Label).string_len(150).not_null())
                    .col(ColumnDef::new(ContactInfo::Value).text().not_null())
                    .col(ColumnDef::new(ContactInfo::Url).text())
                    .col(ColumnDef::new(ContactInfo::Icon).text())
                    .col(ColumnDef::new(ContactInfo::Description).text())
                    .col(
                        ColumnDef::new(ContactInfo::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ContactInfo::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ContactInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContactInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public reads only see active rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_contact_info_display_order
                ON contact_info (display_order, created_at)
                WHERE is_active;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_contact_info_updated_at
                BEFORE UPDATE ON contact_info
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
                DROP TRIGGER IF EXISTS update_contact_info_updated_at ON contact_info;
                DROP INDEX IF EXISTS idx_contact_info_display_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContactInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactInfo {
    Table,
    Id,
    Type,
    Label,
    Value,
    Url,
    Icon,
    Description,
    DisplayOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
