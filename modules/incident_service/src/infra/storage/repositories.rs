//! SeaORM repository implementations

use crate::contract::{Incident, IncidentPage, IncidentType, NewIncident};
use crate::domain::repository::{IncidentRepository, IncidentTypeRepository};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::{entity, mapper};

/// Escape character used in prefix `LIKE` patterns
const LIKE_ESCAPE: char = '!';

// ===== Incident Repository =====

pub struct SeaOrmIncidentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmIncidentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attach the related incident type to a freshly written row
    async fn load(&self, row: entity::Model) -> Result<Incident> {
        let incident_type = match row.incident_type_id {
            Some(type_id) => {
                entity::incident_type::Entity::find_by_id(type_id)
                    .one(&*self.db)
                    .await?
            }
            None => None,
        };

        Ok(mapper::incident_from_row(row, incident_type))
    }
}

#[async_trait]
impl IncidentRepository for SeaOrmIncidentRepository {
    async fn insert(&self, incident: &NewIncident) -> Result<Incident> {
        let active = mapper::new_active_model(incident)
            .ok_or_else(|| anyhow!("incident '{}' has no report date", incident.ref_number))?;

        let row = active.insert(&*self.db).await?;
        self.load(row).await
    }

    async fn update(&self, id: i32, incident: &NewIncident) -> Result<Option<Incident>> {
        let Some(existing) = entity::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = existing.into();
        active.reference_number = Set(incident.ref_number.clone());
        active.description = Set(incident.description.clone());
        if let Some(report_date) = incident.report_date {
            active.report_date = Set(report_date);
        }
        active.status = Set(incident.status.clone());
        active.category = Set(incident.category.clone());
        active.incident_type_id = Set(incident.incident_type_id);

        let row = active.update(&*self.db).await?;
        Ok(Some(self.load(row).await?))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Incident>> {
        let result = entity::Entity::find_by_id(id)
            .find_also_related(entity::incident_type::Entity)
            .one(&*self.db)
            .await?;

        Ok(result.map(|(row, incident_type)| mapper::incident_from_row(row, incident_type)))
    }

    async fn find_by_ref_number_prefix(
        &self,
        prefix: &str,
        page_index: u64,
        page_size: u64,
    ) -> Result<IncidentPage> {
        let page_size = page_size.max(1);
        let pattern = LikeExpr::new(format!("{}%", escape_like(prefix))).escape(LIKE_ESCAPE);

        let paginator = entity::Entity::find()
            .filter(entity::Column::ReferenceNumber.like(pattern))
            .find_also_related(entity::incident_type::Entity)
            .order_by_asc(entity::Column::ReferenceNumber)
            .order_by_asc(entity::Column::Id)
            .paginate(&*self.db, page_size);

        let total_items = paginator.num_items().await?;
        let in_range = page_index
            .checked_mul(page_size)
            .is_some_and(|offset| offset < total_items);
        if !in_range {
            return Ok(IncidentPage::new(Vec::new(), page_index, page_size, total_items));
        }

        let rows = paginator.fetch_page(page_index).await?;

        let items = rows
            .into_iter()
            .map(|(row, incident_type)| mapper::incident_from_row(row, incident_type))
            .collect();

        Ok(IncidentPage::new(items, page_index, page_size, total_items))
    }
}

/// Escape `LIKE` wildcards so the prefix is matched literally
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

// ===== Incident Type Repository =====

pub struct SeaOrmIncidentTypeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmIncidentTypeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncidentTypeRepository for SeaOrmIncidentTypeRepository {
    async fn create(&self, name: &str) -> Result<IncidentType> {
        let active = entity::incident_type::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        };

        let row = active.insert(&*self.db).await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<IncidentType>> {
        let result = entity::incident_type::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<IncidentType>> {
        let result = entity::incident_type::Entity::find()
            .filter(entity::incident_type::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<IncidentType>> {
        let results = entity::incident_type::Entity::find()
            .order_by_asc(entity::incident_type::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}
