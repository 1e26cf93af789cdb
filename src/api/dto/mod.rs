//! Request and response DTOs for the HTTP API.
//!
//! DTOs are kept separate from domain entities so the wire format can
//! evolve without touching the domain layer. Conversions live next to
//! the DTOs as `From` impls.

pub mod commit;
pub mod developer;
pub mod health;
pub mod ingest;
pub mod pagination;
pub mod project;
pub mod repository;
