// src/utils/mod.rs
// Helpers shared by unit and integration tests.

pub mod testing;
