use crate::adapters::animals::{Lion, Mouse, Pigeon, Snake};
use crate::adapters::shapes::{Circle, Rectangle, Square};
use crate::domain::ports::{Creature, Shape};
use crate::utils::error::{Result, SolidError};
use std::collections::BTreeMap;
use std::fmt;

/// 建構參數：名稱與可選的尺寸
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantSpec {
    pub name: String,
    pub dimensions: Vec<f64>,
}

impl VariantSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: Vec::new(),
        }
    }

    pub fn sized(dimensions: Vec<f64>) -> Self {
        Self {
            name: String::new(),
            dimensions,
        }
    }

    pub fn dimension(&self, index: usize, field: &str) -> Result<f64> {
        self.dimensions.get(index).copied().ok_or_else(|| {
            SolidError::validation(
                field,
                format!("{:?}", self.dimensions),
                format!("expected at least {} dimension(s)", index + 1),
            )
        })
    }
}

pub type Constructor<E> = Box<dyn Fn(&VariantSpec) -> Result<Box<E>> + Send + Sync>;

/// Maps a variant kind to the constructor that builds it.
///
/// This is the only place a kind string is looked at; everything past
/// `build` works on the contract type alone.
pub struct VariantCatalog<E: ?Sized> {
    constructors: BTreeMap<String, Constructor<E>>,
}

impl<E: ?Sized> VariantCatalog<E> {
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&VariantSpec) -> Result<Box<E>> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.constructors.contains_key(&kind) {
            tracing::warn!("⚠️ Variant kind '{}' re-registered, replacing constructor", kind);
        }
        self.constructors.insert(kind, Box::new(constructor));
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    pub fn build(&self, kind: &str, spec: &VariantSpec) -> Result<Box<E>> {
        let constructor =
            self.constructors
                .get(kind)
                .ok_or_else(|| SolidError::UnknownVariant {
                    kind: kind.to_string(),
                    known: self.kinds().join(", "),
                })?;
        tracing::debug!("Building variant '{}' from {:?}", kind, spec);
        constructor(spec)
    }
}

impl<E: ?Sized> Default for VariantCatalog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> fmt::Debug for VariantCatalog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantCatalog")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl VariantCatalog<dyn Creature> {
    pub fn animals() -> Self {
        let mut catalog = Self::new();
        catalog
            .register("lion", |spec| {
                Ok(Box::new(Lion::new(spec.name.clone())) as Box<dyn Creature>)
            })
            .register("mouse", |spec| {
                Ok(Box::new(Mouse::new(spec.name.clone())) as Box<dyn Creature>)
            })
            .register("snake", |spec| {
                Ok(Box::new(Snake::new(spec.name.clone())) as Box<dyn Creature>)
            })
            .register("pigeon", |spec| {
                Ok(Box::new(Pigeon::new(spec.name.clone())) as Box<dyn Creature>)
            });
        catalog
    }
}

impl VariantCatalog<dyn Shape> {
    pub fn shapes() -> Self {
        let mut catalog = Self::new();
        catalog
            .register("circle", |spec| {
                let circle = Circle::new(spec.dimension(0, "circle.radius")?)?;
                Ok(Box::new(circle) as Box<dyn Shape>)
            })
            .register("square", |spec| {
                let square = Square::new(spec.dimension(0, "square.side")?)?;
                Ok(Box::new(square) as Box<dyn Shape>)
            })
            .register("rectangle", |spec| {
                let rectangle = Rectangle::new(
                    spec.dimension(0, "rectangle.width")?,
                    spec.dimension(1, "rectangle.height")?,
                )?;
                Ok(Box::new(rectangle) as Box<dyn Shape>)
            });
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Sound;

    #[test]
    fn test_builtin_animal_kinds() {
        let catalog = VariantCatalog::animals();
        assert_eq!(catalog.kinds(), vec!["lion", "mouse", "pigeon", "snake"]);

        let lion = catalog.build("lion", &VariantSpec::named("Leo")).unwrap();
        assert_eq!(lion.name(), "Leo");
        assert_eq!(lion.make_sound().unwrap(), Sound::from("roar"));
    }

    #[test]
    fn test_unknown_kind_lists_known_kinds() {
        let catalog = VariantCatalog::animals();
        let err = catalog
            .build("dragon", &VariantSpec::named("Smaug"))
            .err().unwrap();
        match err {
            SolidError::UnknownVariant { kind, known } => {
                assert_eq!(kind, "dragon");
                assert!(known.contains("lion"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rectangle_needs_two_dimensions() {
        let catalog = VariantCatalog::shapes();
        assert!(catalog
            .build("rectangle", &VariantSpec::sized(vec![2.0]))
            .is_err());
        let rect = catalog
            .build("rectangle", &VariantSpec::sized(vec![2.0, 3.0]))
            .unwrap();
        assert_eq!(rect.draw().unwrap().shape, "rectangle");
    }

    #[test]
    fn test_register_new_kind_without_touching_builtins() {
        struct Cow(String);
        impl Creature for Cow {
            fn name(&self) -> &str {
                &self.0
            }
            fn make_sound(&self) -> Result<Sound> {
                Ok(Sound::from("moo"))
            }
            fn leg_count(&self) -> Result<u32> {
                Ok(4)
            }
        }

        let mut catalog = VariantCatalog::animals();
        catalog.register("cow", |spec| {
            Ok(Box::new(Cow(spec.name.clone())) as Box<dyn Creature>)
        });
        assert!(catalog.contains("cow"));
        let cow = catalog.build("cow", &VariantSpec::named("Daisy")).unwrap();
        assert_eq!(cow.make_sound().unwrap().as_str(), "moo");
    }
}
