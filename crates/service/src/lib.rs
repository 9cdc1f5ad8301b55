//! Service layer providing resource-oriented CRUD operations on top of storage.
//! - Keeps business logic independent of the storage backend.
//! - Exposes one repository trait with an in-memory and a SeaORM implementation.

pub mod errors;
pub mod items;
#[cfg(test)]
pub mod test_support;
