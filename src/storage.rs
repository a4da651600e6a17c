use std::path::Path;

use async_trait::async_trait;
use opendal::{services, Operator};

/// Persistence seam for raw uploaded documents.
///
/// The parsed ontology lives in the process-wide store; this trait only
/// keeps the original bytes around so an upload can be inspected later.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Persists the raw document under the given name, replacing any
    /// previous document with the same name.
    async fn save(&self, name: &str, bytes: Vec<u8>) -> crate::Result<()>;

    /// Reads a previously stored document back.
    async fn read(&self, name: &str) -> crate::Result<Vec<u8>>;
}

/// Storage adapter backed by an [`opendal`] operator.
#[derive(Clone, Debug)]
pub struct OpendalStorage {
    operator: Operator,
}

impl OpendalStorage {
    /// Creates a filesystem-backed storage rooted at the given directory.
    pub fn filesystem(root: &Path) -> crate::Result<Self> {
        let builder = services::Fs::default().root(&root.to_string_lossy());
        Ok(Self {
            operator: Operator::new(builder)?.finish(),
        })
    }

    /// Creates an in-memory storage, used by tests.
    pub fn memory() -> crate::Result<Self> {
        Ok(Self {
            operator: Operator::new(services::Memory::default())?.finish(),
        })
    }
}

#[async_trait]
impl DocumentStorage for OpendalStorage {
    async fn save(&self, name: &str, bytes: Vec<u8>) -> crate::Result<()> {
        self.operator.write(name, bytes).await?;
        Ok(())
    }

    async fn read(&self, name: &str) -> crate::Result<Vec<u8>> {
        Ok(self.operator.read(name).await?.to_vec())
    }
}
