use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager.create_table(projects_table()).await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Slugs are unique regardless of case
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_projects_slug_unique
                ON projects (lower(slug));
                "#,
            )
            .await?;

        // Default listing order and the "recent projects" read
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_created_at
                ON projects (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_category
                ON projects (category);
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
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
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
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                DROP INDEX IF EXISTS idx_projects_slug_unique;
                DROP INDEX IF EXISTS idx_projects_created_at;
                DROP INDEX IF EXISTS idx_projects_category;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

fn projects_table() -> TableCreateStatement {
    Table::create()
        .table(Projects::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Projects::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Projects::Slug).string_len(150).not_null())
        .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
        .col(ColumnDef::new(Projects::Category).text().not_null())
        .col(ColumnDef::new(Projects::Description).text().not_null())
        .col(
            ColumnDef::new(Projects::LongDescription)
                .text()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Projects::Image).text())
        .col(ColumnDef::new(Projects::Status).text().not_null())
        .col(ColumnDef::new(Projects::ProjectDate).date().not_null())
        .col(ColumnDef::new(Projects::Duration).text())
        .col(ColumnDef::new(Projects::Team).text())
        .col(ColumnDef::new(Projects::Role).text())
        .col(json_list(Projects::Tags))
        .col(json_list(Projects::Features))
        .col(json_list(Projects::Challenges))
        .col(json_list(Projects::Solutions))
        .col(json_list(Projects::Screenshots))
        .col(
            ColumnDef::new(Projects::TechStack)
                .json_binary()
                .not_null()
                .default(Expr::cust("'{}'::jsonb")),
        )
        .col(ColumnDef::new(Projects::GithubUrl).text())
        .col(ColumnDef::new(Projects::LiveUrl).text())
        .col(
            ColumnDef::new(Projects::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Projects::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn json_list(column: Projects) -> ColumnDef {
    ColumnDef::new(column)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Slug,
    Title,
    Category,
    Description,
    LongDescription,
    Image,
    Status,
    ProjectDate,
    Duration,
    Team,
    Role,
    Tags,
    Features,
    Challenges,
    Solutions,
    Screenshots,
    TechStack,
    GithubUrl,
    LiveUrl,
    CreatedAt,
    UpdatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_table_uses_jsonb_lists_and_date_column() {
        let sql = projects_table().to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#""projects""#));
        assert!(sql.contains(r#""tech_stack" jsonb"#));
        assert!(sql.contains(r#""project_date" date"#));
        assert!(sql.contains("'[]'::jsonb"));
        assert!(sql.contains("gen_random_uuid()"));
    }
}
