//! Domain layer: license identifiers, the compatibility table, and the pure
//! services that group components and audit them against the project license.

pub mod domain;
pub mod policies;
pub mod services;
