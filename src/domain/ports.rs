use crate::domain::model::{Animal, AnimalId, Drawing, Request, Response, Sound, StoredAnimal};
use crate::utils::error::{Result, SolidError};
use async_trait::async_trait;

/// Capability contract shared by every animal variant.
///
/// All methods are required: a variant that forgets one does not compile.
pub trait Creature: Send + Sync {
    fn name(&self) -> &str;
    fn make_sound(&self) -> Result<Sound>;
    fn leg_count(&self) -> Result<u32>;
}

/// Drawing is the only thing a shape has to know how to do.
pub trait Shape: Send + Sync {
    fn draw(&self) -> Result<Drawing>;
}

/// Low-level transport the `Http` component depends on.
#[async_trait]
pub trait Connection: Send + Sync {
    async fn request(&self, request: &Request) -> Result<Response>;
}

/// 動物的持久化埠
#[async_trait]
pub trait AnimalStore: Send + Sync {
    async fn get_animal(&self, id: AnimalId) -> Result<StoredAnimal>;
    async fn save(&self, animal: &Animal) -> Result<AnimalId>;
    async fn list(&self) -> Result<Vec<StoredAnimal>>;
}

// 基底 Animal 是抽象本身，不是變體，所以能力一律回報未實作
impl Creature for Animal {
    fn name(&self) -> &str {
        Animal::name(self)
    }

    fn make_sound(&self) -> Result<Sound> {
        Err(SolidError::not_implemented(
            format!("animal '{}'", self.name()),
            "make_sound",
        ))
    }

    fn leg_count(&self) -> Result<u32> {
        Err(SolidError::not_implemented(
            format!("animal '{}'", self.name()),
            "leg_count",
        ))
    }
}

/// The shape abstraction with no drawing of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractShape;

impl Shape for AbstractShape {
    fn draw(&self) -> Result<Drawing> {
        Err(SolidError::not_implemented("shape", "draw"))
    }
}

/// The connection abstraction; any request fails fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedConnection;

#[async_trait]
impl Connection for UnimplementedConnection {
    async fn request(&self, _request: &Request) -> Result<Response> {
        Err(SolidError::not_implemented("connection", "request"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HttpMethod;

    #[test]
    fn test_base_animal_signals_not_implemented() {
        let animal = Animal::new("generic");
        assert!(matches!(
            animal.make_sound(),
            Err(SolidError::NotImplemented { capability: "make_sound", .. })
        ));
        assert!(matches!(
            animal.leg_count(),
            Err(SolidError::NotImplemented { capability: "leg_count", .. })
        ));
        assert_eq!(Creature::name(&animal), "generic");
    }

    #[test]
    fn test_abstract_shape_signals_not_implemented() {
        assert!(matches!(
            AbstractShape.draw(),
            Err(SolidError::NotImplemented { capability: "draw", .. })
        ));
    }

    #[tokio::test]
    async fn test_unimplemented_connection_fails_fast() {
        let request = Request {
            url: "https://example.com".to_string(),
            method: HttpMethod::Get,
            options: Default::default(),
        };
        let result = UnimplementedConnection.request(&request).await;
        assert!(matches!(
            result,
            Err(SolidError::NotImplemented { capability: "request", .. })
        ));
    }
}
