//! Application context - dependency injection container

use std::sync::Arc;

use mergington_core::{ActivityStore, SignupService};
use mergington_domain::{Config, MergingtonError, Result};
use mergington_infra::errors::map_join_error;
use mergington_infra::seed::{default_activities, seed_activities};
use mergington_infra::{DbManager, SqliteActivityStore};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub signup: Arc<SignupService>,
}

impl AppContext {
    /// Build the context from configuration.
    ///
    /// Opens the database, creates the schema and, when enabled, seeds the
    /// default activity catalog.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let db_config = config.database.clone();
        let db = tokio::task::spawn_blocking(move || {
            DbManager::new(&db_config.path, db_config.pool_size)
        })
        .await
        .map_err(map_join_error)??;
        let db = Arc::new(db);

        let store: Arc<dyn ActivityStore> = Arc::new(SqliteActivityStore::new(Arc::clone(&db)));
        store.init_schema().await?;

        if config.seed.enabled {
            seed_activities(store.as_ref(), default_activities()).await?;
        } else {
            info!("activity seeding disabled");
        }

        let signup = Arc::new(SignupService::new(store));

        info!(db_path = %db.path().display(), "application context ready");

        Ok(Self { config, db, signup })
    }

    /// Check every component the routes depend on.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_database_health().await)
            .add_component(self.check_pool_health().await)
            .add_component(ComponentHealth::healthy("signup_service"));

        status.calculate_score();
        status
    }

    /// Run a trivial query on a pooled connection off the async runtime.
    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        let outcome = tokio::task::spawn_blocking(move || db.health_check())
            .await
            .map_err(map_join_error)
            .and_then(|result| result);

        match outcome {
            Ok(()) => ComponentHealth::healthy("database"),
            Err(err) => {
                tracing::warn!(error = %err, "database health check failed");
                ComponentHealth::unhealthy("database", health_message(&err))
            }
        }
    }

    /// Report pool occupancy and checkout counters.
    async fn check_pool_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        let outcome =
            tokio::task::spawn_blocking(move || (db.pool_health(), db.pool_metrics())).await;

        match outcome {
            Ok((health, _)) if !health.healthy => ComponentHealth::unhealthy(
                "connection_pool",
                health.message.unwrap_or_else(|| "pool unhealthy".to_string()),
            ),
            Ok((health, metrics)) => ComponentHealth {
                message: Some(format!(
                    "{} open, {} idle, max {}; {} checkouts, {} timeouts, avg {} ms",
                    health.active_connections,
                    health.idle_connections,
                    health.max_connections,
                    metrics.connections_acquired,
                    metrics.connections_timeout,
                    metrics.avg_acquisition_time_ms,
                )),
                ..ComponentHealth::healthy("connection_pool")
            },
            Err(err) => {
                ComponentHealth::unhealthy("connection_pool", map_join_error(err).to_string())
            }
        }
    }
}

fn health_message(err: &MergingtonError) -> String {
    match err {
        MergingtonError::Database(message) | MergingtonError::Internal(message) => message.clone(),
        other => other.to_string(),
    }
}
