//! Capability dispatch over heterogeneous variants.
//!
//! The registry only knows the contract type `E` and a capability closure.
//! It never looks at which variant it is holding, so a new variant is added
//! by implementing the contract and registering an instance.

use crate::domain::model::{Drawing, Sound};
use crate::domain::ports::{Creature, Shape};
use crate::utils::error::Result;
use std::fmt;

/// Invoke `capability` on every entity in order and collect the results.
///
/// Stops at the first error; later entities are not invoked.
pub fn dispatch<'a, E, R, I, F>(entities: I, capability: F) -> Result<Vec<R>>
where
    E: ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
    F: Fn(&E) -> Result<R>,
{
    entities.into_iter().map(capability).collect()
}

pub struct CapabilityRegistry<E: ?Sized> {
    entries: Vec<Box<E>>,
}

impl<E: ?Sized> CapabilityRegistry<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, entity: Box<E>) -> &mut Self {
        self.entries.push(entity);
        self
    }

    pub fn with(mut self, entity: Box<E>) -> Self {
        self.entries.push(entity);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    pub fn invoke<R, F>(&self, capability_name: &str, capability: F) -> Result<Vec<R>>
    where
        F: Fn(&E) -> Result<R>,
    {
        tracing::debug!(
            "Invoking `{}` on {} entities",
            capability_name,
            self.entries.len()
        );

        let results = dispatch(self.iter(), |entity| {
            capability(entity).inspect_err(|e| {
                tracing::warn!("⚠️ `{}` failed: {}", capability_name, e);
            })
        })?;

        tracing::info!("✅ `{}` produced {} results", capability_name, results.len());
        Ok(results)
    }
}

impl<E: ?Sized> Default for CapabilityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> fmt::Debug for CapabilityRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<E: ?Sized> FromIterator<Box<E>> for CapabilityRegistry<E> {
    fn from_iter<T: IntoIterator<Item = Box<E>>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn animal_sound(animals: &CapabilityRegistry<dyn Creature>) -> Result<Vec<Sound>> {
    animals.invoke("make_sound", |animal| animal.make_sound())
}

pub fn animal_leg_count(animals: &CapabilityRegistry<dyn Creature>) -> Result<Vec<u32>> {
    animals.invoke("leg_count", |animal| animal.leg_count())
}

pub fn draw_all(shapes: &CapabilityRegistry<dyn Shape>) -> Result<Vec<Drawing>> {
    shapes.invoke("draw", |shape| shape.draw())
}
