use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interests::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Interests::Slug).string_len(150).not_null())
                    .col(ColumnDef::new(Interests::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Interests::Excerpt).text().not_null())
                    .col(ColumnDef::new(Interests::Content).text())
                    .col(ColumnDef::new(Interests::Category).text().not_null())
                    .col(ColumnDef::new(Interests::Type).text().not_null())
                    .col(ColumnDef::new(Interests::Icon).text().not_null())
                    .col(ColumnDef::new(Interests::Color).text().not_null())
                    .col(
                        ColumnDef::new(Interests::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Interests::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Interests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Interests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_interests_slug_unique
                ON interests (lower(slug));
                "#,
            )
            .await?;

        // Spotlight read filters on featured
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_interests_featured
                ON interests (featured, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_interests_updated_at
                BEFORE UPDATE ON interests
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
                DROP TRIGGER IF EXISTS update_interests_updated_at ON interests;
                DROP INDEX IF EXISTS idx_interests_slug_unique;
                DROP INDEX IF EXISTS idx_interests_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Interests {
    Table,
    Id,
    Slug,
    Title,
    Excerpt,
    Content,
    Category,
    Type,
    Icon,
    Color,
    Tags,
    Featured,
    CreatedAt,
    UpdatedAt,
}
