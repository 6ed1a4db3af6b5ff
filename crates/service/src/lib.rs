//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates the HTTP surface from data access.
//! - Reuses the entity definitions in the `models` crate.
//! - Provides clear error types per operation.

pub mod errors;

pub mod cliente_service;
pub mod factura_service;
pub mod residuo_service;

#[cfg(test)]
pub mod test_support;
