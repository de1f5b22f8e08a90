//! # Core Module
//!
//! Stateless building blocks: the data model, the rating rules and access
//! to statistics sources.
//!
//! - **Data Model** ([`models`]) - Positions, stats, attribute profiles, players and teams
//! - **Rating Rules** ([`ratings`]) - Position mapping, attribute conversion and derived probabilities
//! - **Sources** ([`io`]) - The stats source trait and the CSV-backed implementation
//!
//! Everything here is deterministic; the same inputs always yield the same
//! profile.

pub mod io;
pub mod models;
pub mod ratings;
