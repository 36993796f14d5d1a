//! Configuration loading and management for the availability engine.
//!
//! This module provides functionality to load a tenant's booking settings
//! from YAML files: business hours, booking-window rules and per-staff
//! schedules. Schedules are validated here, at load time, never during
//! availability evaluation.
//!
//! # Example
//!
//! ```no_run
//! use availability_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo-salon").unwrap();
//! println!("Loaded tenant: {}", config.tenant().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{StaffMember, TenantConfig};
