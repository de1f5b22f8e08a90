//! # Courtside Core Library
//!
//! Turns real per-player basketball statistics into bounded attribute
//! profiles for a game-simulation engine, and assembles positionally
//! balanced teams of such players.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Player`, `Team`,
//!   `RawStats`), the position mapper, the attribute converter and the
//!   derived-probability formulas, plus the `StatsSource` abstraction and
//!   its file-backed and in-memory implementations.
//!
//! - **[`engine`]: The Logic Core.** The cached `StatsProvider`, roster
//!   balancing, assembly configuration, cancellation and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures: assembling one
//!   team, or two for a matchup.

pub mod core;
pub mod engine;
pub mod workflows;
