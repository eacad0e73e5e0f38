//! Core systems
//!
//! Cross-cutting infrastructure shared by all vehicle modules.

pub mod logging;
