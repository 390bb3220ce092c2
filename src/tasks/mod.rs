//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: drops viewport entries past their TTL even if no one looks them up again

mod cleanup;

pub use cleanup::spawn_cleanup_task;
