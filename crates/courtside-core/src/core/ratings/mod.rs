//! # Ratings Module
//!
//! Pure, deterministic rules that turn box-score numbers into the bounded
//! ratings the game engine understands.
//!
//! - [`labels`] - Free-text position labels to canonical slots
//! - [`conversion`] - Season stats to an [`AttributeProfile`](crate::core::models::attributes::AttributeProfile)
//! - [`probabilities`] - Interaction probabilities derived from a profile
//! - [`modifiers`] / [`defaults`] - Per-position constant tables

pub mod conversion;
pub mod defaults;
pub mod labels;
pub mod modifiers;
pub mod probabilities;
