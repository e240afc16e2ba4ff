//! Shared configuration for OpenFiscal.
//!
//! This crate provides the layered application configuration consumed by
//! the analyzer binary: which dataset file to read, which fields to group,
//! pivot, and sum over, and where exported CSV files land.

pub mod config;

pub use config::AppConfig;
