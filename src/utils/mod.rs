//! Utility modules: JSON persistence.

pub mod persistence;
