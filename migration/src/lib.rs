pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000010_create_table_projects;
mod m20260301_000020_create_table_interests;
mod m20260301_000030_create_table_skills;
mod m20260301_000040_create_table_timeline;
mod m20260301_000050_create_table_contact_info;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000010_create_table_projects::Migration),
            Box::new(m20260301_000020_create_table_interests::Migration),
            Box::new(m20260301_000030_create_table_skills::Migration),
            Box::new(m20260301_000040_create_table_timeline::Migration),
            Box::new(m20260301_000050_create_table_contact_info::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_in_name_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(names, sorted);
        assert_eq!(names.len(), 6);
        // Trigger function exists before any table trigger uses it
        assert_eq!(names[0], "m20260301_000001_create_updated_at_function");
    }
}

