//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (filesystem, processes, settings files).

pub mod adapters;
pub mod ports;
