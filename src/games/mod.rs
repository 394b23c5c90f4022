//! Game implementations.

pub mod imposter;
