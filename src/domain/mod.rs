//! Domain layer - Core carving logic
//!
//! This module contains the carving entities, the carver service and the
//! sink trait it reports to. It performs no I/O.

pub mod entities;
pub mod repositories;
pub mod services;
