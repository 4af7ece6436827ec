use crate::domain::model::{Animal, AnimalId, StoredAnimal};
use crate::domain::ports::AnimalStore;
use crate::utils::error::{Result, SolidError};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;
use tokio::sync::Mutex;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct AnimalTable {
    next_id: u64,
    animals: BTreeMap<u64, StoredAnimal>,
}

impl AnimalTable {
    fn insert(&mut self, animal: &Animal) -> AnimalId {
        self.next_id += 1;
        let id = AnimalId(self.next_id);
        self.animals.insert(
            id.0,
            StoredAnimal {
                id,
                animal: animal.clone(),
                saved_at: Utc::now(),
            },
        );
        id
    }

    fn get(&self, id: AnimalId) -> Result<StoredAnimal> {
        self.animals
            .get(&id.0)
            .cloned()
            .ok_or(SolidError::NotFound { id: id.0 })
    }

    fn list(&self) -> Vec<StoredAnimal> {
        self.animals.values().cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAnimalStore {
    table: RwLock<AnimalTable>,
}

impl InMemoryAnimalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnimalStore for InMemoryAnimalStore {
    async fn get_animal(&self, id: AnimalId) -> Result<StoredAnimal> {
        let table = self.table.read().unwrap_or_else(|p| p.into_inner());
        table.get(id)
    }

    async fn save(&self, animal: &Animal) -> Result<AnimalId> {
        let mut table = self.table.write().unwrap_or_else(|p| p.into_inner());
        let id = table.insert(animal);
        tracing::debug!("Saved '{}' in memory as #{}", animal.name(), id);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredAnimal>> {
        let table = self.table.read().unwrap_or_else(|p| p.into_inner());
        Ok(table.list())
    }
}

/// 以單一 JSON 檔案保存所有動物
#[derive(Debug)]
pub struct JsonFileAnimalStore {
    path: PathBuf,
    // 序列化 read-modify-write
    lock: Mutex<()>,
}

impl JsonFileAnimalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<AnimalTable> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AnimalTable::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, table: &AnimalTable) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(table)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl AnimalStore for JsonFileAnimalStore {
    async fn get_animal(&self, id: AnimalId) -> Result<StoredAnimal> {
        let _guard = self.lock.lock().await;
        self.load().await?.get(id)
    }

    async fn save(&self, animal: &Animal) -> Result<AnimalId> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;
        let id = table.insert(animal);
        self.persist(&table).await?;
        tracing::debug!(
            "Saved '{}' to {} as #{}",
            animal.name(),
            self.path.display(),
            id
        );
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredAnimal>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_in_memory_ids_increase() {
        let store = InMemoryAnimalStore::new();
        let first = store.save(&Animal::new("Leo")).await.unwrap();
        let second = store.save(&Animal::new("Jerry")).await.unwrap();

        assert_eq!(first, AnimalId(1));
        assert_eq!(second, AnimalId(2));
        assert_eq!(store.get_animal(second).await.unwrap().animal.name(), "Jerry");
    }

    #[tokio::test]
    async fn test_in_memory_missing_id() {
        let store = InMemoryAnimalStore::new();
        let err = store.get_animal(AnimalId(42)).await.unwrap_err();
        assert!(matches!(err, SolidError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn test_json_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileAnimalStore::new(temp_dir.path().join("zoo.json"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_store_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("zoo.json");
        let store = JsonFileAnimalStore::new(&path);

        store.save(&Animal::new("Kaa")).await.unwrap();
        assert!(path.exists());
    }
}
