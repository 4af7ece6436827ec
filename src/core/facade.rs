use crate::domain::model::{Animal, AnimalId, StoredAnimal};
use crate::domain::ports::AnimalStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// Facade that keeps the animal's properties and delegates persistence to
/// the injected store.
#[derive(Debug)]
pub struct AnimalFacade<S: AnimalStore> {
    animal: Animal,
    store: Arc<S>,
}

impl<S: AnimalStore> AnimalFacade<S> {
    pub fn new(animal: Animal, store: Arc<S>) -> Self {
        Self { animal, store }
    }

    pub fn name(&self) -> &str {
        self.animal.name()
    }

    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    pub async fn get(&self, id: AnimalId) -> Result<StoredAnimal> {
        self.store.get_animal(id).await
    }

    pub async fn save(&self) -> Result<AnimalId> {
        let id = self.store.save(&self.animal).await?;
        tracing::info!("💾 Saved '{}' as #{}", self.animal.name(), id);
        Ok(id)
    }
}
