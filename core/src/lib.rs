//! # NEXIUM CORE LIBRARY
//!
//! **RUST-POWERED DEPENDENCY INJECTION RUNTIME**
//!
//! **ARCHITECTURE**: Token-keyed registry with recursive graph resolution
//! **GUARANTEE**: Lifetime-safe wiring via captive-dependency enforcement
//! **COMPATIBILITY**: Synchronous core, no internal locking

pub mod api;
pub mod di;
pub mod errors;
pub mod metadata;

// **SHARED VALUE MODEL REGISTRATION**
pub mod types;
