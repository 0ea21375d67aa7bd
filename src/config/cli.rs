use crate::core::pantry::Pantry;
use crate::core::PantryStore;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 以 JSON 檔案保存使用者的食材清單
#[derive(Debug, Clone)]
pub struct LocalPantryStore {
    path: PathBuf,
}

impl LocalPantryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PantryStore for LocalPantryStore {
    async fn load(&self) -> Result<Vec<String>> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!("Pantry file {} not found, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let data = tokio::fs::read(&self.path).await?;
        let pantry: Pantry = serde_json::from_slice(&data)?;
        Ok(pantry.items().to_vec())
    }

    async fn save(&self, items: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let pantry = Pantry::from_items(items.iter().cloned());
        let json = serde_json::to_string_pretty(&pantry)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
