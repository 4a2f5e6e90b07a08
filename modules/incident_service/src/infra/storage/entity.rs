//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Incidents table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "incidents")]
pub struct Model {
    /// Generated identity
    #[sea_orm(primary_key)]
    pub id: i32,

    pub reference_number: String,

    pub description: String,

    pub report_date: Date,

    pub status: String,

    pub category: String,

    /// Foreign key to incident_types
    pub incident_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "incident_type::Entity",
        from = "Column::IncidentTypeId",
        to = "incident_type::Column::Id"
    )]
    IncidentType,
}

impl Related<incident_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncidentType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Incident type module
pub mod incident_type {
    use sea_orm::entity::prelude::*;

    /// Incident types table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "incident_types")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Display name, unique
        #[sea_orm(unique)]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with incidents
        #[sea_orm(has_many = "super::Entity")]
        Incidents,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Incidents.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
