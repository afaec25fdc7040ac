//! Infrastructure layer

pub mod clock;
pub mod persistence;

pub use clock::FixedClock;
pub use persistence::{InMemoryClientRepository, InMemoryContractRepository, InMemoryStore};
