//! # Engine Module
//!
//! Stateful machinery behind team assembly.
//!
//! - **Stats access** ([`provider`], [`cache`]) - a [`StatsSource`](crate::core::io::traits::StatsSource)
//!   wrapped with an explicit cache of rosters and season stats
//! - **Balancing** ([`balance`]) - guarantees every position slot is occupied
//! - **Configuration** ([`config`]) - season, roster limits, pacing and modifier table
//! - **Control** ([`cancel`], [`progress`]) - cancellation and progress callbacks
//! - **Error Handling** ([`error`])

pub mod balance;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod error;
pub mod progress;
pub mod provider;
