//! API Routes

pub mod clients;
pub mod contracts;
pub mod health;
