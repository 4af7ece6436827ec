pub mod catalog;
pub mod discount;
pub mod dispatch;
pub mod facade;
pub mod http;

pub use crate::domain::model::{Animal, AnimalId, Drawing, HttpMethod, Request, Response, Sound};
pub use crate::domain::ports::{AnimalStore, Connection, Creature, Shape};
pub use crate::utils::error::Result;
