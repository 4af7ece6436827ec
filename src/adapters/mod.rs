// Adapters layer: concrete variants and port implementations.

pub mod animals;
pub mod connection;
pub mod shapes;
pub mod storage;
