use async_trait::async_trait;
use domain_work_order::service::DocumentStore;
use opendal::services::Fs;
use opendal::Operator;

/// Reference documents on the local filesystem behind an opendal operator.
pub struct FsDocumentStore {
    op: Operator,
}

impl FsDocumentStore {
    pub fn new(root: &str) -> anyhow::Result<Self> {
        let mut builder = Fs::default();
        builder.root(root);
        Ok(Self {
            op: Operator::new(builder)?.finish(),
        })
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn save(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()> {
        Ok(self.op.write(path, content).await?)
    }

    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        Ok(self.op.delete(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path().to_str().unwrap()).unwrap();

        store.save("work-orders/a/doc.pdf", b"%PDF-1.4".to_vec()).await.unwrap();
        assert!(dir.path().join("work-orders/a/doc.pdf").exists());

        store.delete("work-orders/a/doc.pdf").await.unwrap();
        assert!(!dir.path().join("work-orders/a/doc.pdf").exists());
    }
}
