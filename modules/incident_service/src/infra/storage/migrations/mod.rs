//! Database migrations for incident service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_incident_types::Migration),
            Box::new(m20250301_000002_create_incidents::Migration),
        ]
    }
}

mod m20250301_000001_create_incident_types {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_incident_types"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(IncidentTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(IncidentTypes::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(IncidentTypes::Name)
                                .string_len(80)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(IncidentTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum IncidentTypes {
        Table,
        Id,
        Name,
    }
}

mod m20250301_000002_create_incidents {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_incidents"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Incidents::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Incidents::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Incidents::ReferenceNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Incidents::Description).text().not_null())
                        .col(ColumnDef::new(Incidents::ReportDate).date().not_null())
                        .col(
                            ColumnDef::new(Incidents::Status)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Incidents::Category)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Incidents::IncidentTypeId).integer())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_incidents_incident_type")
                                .from(Incidents::Table, Incidents::IncidentTypeId)
                                .to(IncidentTypes::Table, IncidentTypes::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_incidents_reference_number")
                        .table(Incidents::Table)
                        .col(Incidents::ReferenceNumber)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Incidents::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Incidents {
        Table,
        Id,
        ReferenceNumber,
        Description,
        ReportDate,
        Status,
        Category,
        IncidentTypeId,
    }

    #[derive(DeriveIden)]
    enum IncidentTypes {
        Table,
        Id,
    }
}
