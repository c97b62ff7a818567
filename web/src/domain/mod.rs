//! Domain layer
//!
//! Pure business types with no knowledge of HTTP or rendering.
//! - `entities`: domain models
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
