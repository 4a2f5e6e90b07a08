//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::IncidentsApi;
use crate::domain::{EventPublisher, NoOpEventPublisher, Service, TracingEventPublisher};
use crate::infra::storage::repositories::{SeaOrmIncidentRepository, SeaOrmIncidentTypeRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Incident service module
pub struct IncidentServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for IncidentServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl IncidentServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Build repositories, event publisher and domain service on top of `db`
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let cfg = self.config.read().clone();

        if cfg.run_migrations {
            self.migrate(&db).await?;
        }

        // Build repositories
        let incident_repo = Arc::new(SeaOrmIncidentRepository::new(db.clone()));
        let incident_type_repo = Arc::new(SeaOrmIncidentTypeRepository::new(db));

        let event_publisher: Arc<dyn EventPublisher> = if cfg.publish_events {
            Arc::new(TracingEventPublisher)
        } else {
            Arc::new(NoOpEventPublisher)
        };

        // Build domain service
        let service = Arc::new(
            Service::new(incident_repo, incident_type_repo, event_publisher)
                .with_page_size(cfg.page_size),
        );

        let seeded = service
            .ensure_incident_types(&cfg.seed_incident_types)
            .await?;
        if seeded > 0 {
            tracing::info!(count = seeded, "seeded incident types");
        }

        *self.service.write() = Some(service);

        tracing::info!(page_size = cfg.page_size, "Incident service initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Incident service migrations completed");
        Ok(())
    }

    /// Initialized domain service
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Result<Arc<dyn IncidentsApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Register REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering incident service REST routes");
        Ok(crate::api::rest::routes::register_routes(router, service))
    }

    /// Serve the REST API on `listener` until `cancel` fires
    pub async fn serve(
        self: Arc<Self>,
        listener: TcpListener,
        cancel: CancellationToken,
    ) -> Result<()> {
        let router = self
            .register_rest(axum::Router::new())?
            .layer(TraceLayer::new_for_http());

        let addr = listener.local_addr()?;
        tracing::info!(%addr, "incident service listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(cancel.cancelled_owned())
            .await?;

        tracing::info!("incident service stopped");
        Ok(())
    }
}
