use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Export directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    export_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.export_dir.join(name)).await?)
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let target = self.export_dir.join(name);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).await?;
        }

        // 先寫暫存檔再改名，watch 模式下讀者不會看到半個檔案
        let partial = target.with_extension("partial");
        fs::write(&partial, data).await?;
        fs::rename(&partial, &target).await?;

        tracing::debug!("Exported {}", target.display());
        Ok(())
    }
}
