use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, UpliftError};
use crate::config::Config;
use crate::session::Session;
use crate::store::sqlite::SqliteStore;
use crate::store::Store;

pub struct AppContext {
    pub store: Arc<dyn Store + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store: Arc<dyn Store + Send + Sync> = Arc::new(SqliteStore::new(&db_path)?);
        Ok(Self { store, config })
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store: Arc<dyn Store + Send + Sync> = Arc::new(SqliteStore::in_memory()?);
        Ok(Self { store, config })
    }

    /// Start a session against the configured store. The collection is
    /// loaded once here; the session owns it for the rest of the run.
    pub fn session(&self) -> Session {
        Session::new(self.store.clone(), self.config.scoring.clone())
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| UpliftError::Config("Could not find data directory".into()))?;
        let uplift_dir = data_dir.join("uplift");
        std::fs::create_dir_all(&uplift_dir)?;
        Ok(uplift_dir.join("uplift.db"))
    }
}
