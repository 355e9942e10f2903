//! Source data loading
//!
//! The three record collections arrive as JSON array files. File access goes
//! through the [`FileReader`] trait so tests can feed fixture bytes without
//! touching the filesystem; [`FsReader`] is the production implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use crate::config::DataConfig;
use crate::error::{AppError, Result};
use crate::models::{Organization, Ticket, User};

/// Read-only byte access to source data files
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Filesystem-backed [`FileReader`]
pub struct FsReader;

#[async_trait]
impl FileReader for FsReader {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// The three raw record collections, freshly deserialized
#[derive(Debug, Clone)]
pub struct DataSet {
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
    pub tickets: Vec<Ticket>,
}

impl DataSet {
    /// Load and deserialize all three collections.
    ///
    /// Any unreadable file or malformed JSON aborts the whole load; no
    /// partially loaded data set is ever returned.
    pub async fn load(reader: &dyn FileReader, data: &DataConfig) -> Result<Self> {
        let users: Vec<User> = read_collection(reader, &data.users_path).await?;
        let organizations: Vec<Organization> =
            read_collection(reader, &data.organizations_path).await?;
        let tickets: Vec<Ticket> = read_collection(reader, &data.tickets_path).await?;

        info!(
            users = users.len(),
            organizations = organizations.len(),
            tickets = tickets.len(),
            "Loaded source collections"
        );

        Ok(Self {
            users,
            organizations,
            tickets,
        })
    }
}

async fn read_collection<T: DeserializeOwned>(
    reader: &dyn FileReader,
    path: &Path,
) -> Result<Vec<T>> {
    let bytes = reader
        .read(path)
        .await
        .map_err(|e| AppError::Load(format!("{}: {}", path.display(), e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Serialization(format!("{}: {}", path.display(), e)))
}
