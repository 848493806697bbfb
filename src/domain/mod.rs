//! Domain layer: value objects, aggregates, capability ports and services.
pub mod aggregates;
pub mod ports;
pub mod services;
pub mod value_objects;
