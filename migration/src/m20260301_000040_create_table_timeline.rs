use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timeline::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timeline::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Timeline::Year).text().not_null())
                    .col(ColumnDef::new(Timeline::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Timeline::Type).text().not_null())
                    .col(ColumnDef::new(Timeline::Description).text().not_null())
                    .col(ColumnDef::new(Timeline::Location).text().not_null())
                    // Nullable lists: absent is distinct from empty
                    .col(ColumnDef::new(Timeline::Technologies).json_binary())
                    .col(ColumnDef::new(Timeline::Achievements).json_binary())
                    .col(ColumnDef::new(Timeline::Status).text())
                    .col(
                        ColumnDef::new(Timeline::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Timeline::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Timeline::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timeline_order_index")
                    .table(Timeline::Table)
                    .col(Timeline::OrderIndex)
                    .col(Timeline::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_timeline_updated_at
                BEFORE UPDATE ON timeline
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_timeline_updated_at ON timeline;")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_timeline_order_index")
                    .table(Timeline::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Timeline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Timeline {
    Table,
    Id,
    Year,
    Title,
    Type,
    Description,
    Location,
    Technologies,
    Achievements,
    Status,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}
