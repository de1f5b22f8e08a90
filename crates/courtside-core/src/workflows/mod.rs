//! # Workflows Module
//!
//! Top-level entry points that tie a stats source, the rating conversion and
//! the roster balancer together.
//!
//! - **Team Assembly** ([`assemble`]) - roster fetch, per-player conversion,
//!   roster size checks and balancing for one team
//! - **Matchup** ([`matchup`]) - two teams assembled against a shared cache

pub mod assemble;
pub mod matchup;
