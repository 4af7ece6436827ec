use crate::domain::model::{Animal, Sound};
use crate::domain::ports::Creature;
use crate::utils::error::Result;

// 每個變體自己決定叫聲與腳數，呼叫端不需要知道是哪一種動物
macro_rules! animal_variant {
    ($(#[$meta:meta])* $variant:ident, sound = $sound:literal, legs = $legs:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $variant {
            animal: Animal,
        }

        impl $variant {
            pub const SOUND: &'static str = $sound;
            pub const LEGS: u32 = $legs;

            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    animal: Animal::new(name),
                }
            }

            pub fn animal(&self) -> &Animal {
                &self.animal
            }
        }

        impl Creature for $variant {
            fn name(&self) -> &str {
                self.animal.name()
            }

            fn make_sound(&self) -> Result<Sound> {
                Ok(Sound::from(Self::SOUND))
            }

            fn leg_count(&self) -> Result<u32> {
                Ok(Self::LEGS)
            }
        }
    };
}

animal_variant!(Lion, sound = "roar", legs = 4);
animal_variant!(Mouse, sound = "squeak", legs = 4);
animal_variant!(
    /// Legless, so `leg_count` is zero rather than an error.
    Snake,
    sound = "hiss",
    legs = 0
);
animal_variant!(Pigeon, sound = "coo", legs = 2);
