//! Types and pure logic shared by the BookBee admin UI.
//!
//! Nothing in this crate touches the network: the frontend owns transport,
//! this crate owns the shapes on the wire and the rules around them.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
