//! # Core Models Module
//!
//! Plain data types shared by every layer of Courtside.
//!
//! ## Key Components
//!
//! - [`position`] - The five canonical on-court slots
//! - [`stats`] - Raw per-game statistics and season totals from a stats source
//! - [`attributes`] - The bounded attribute profile read by the game engine
//! - [`player`] - A converted player with profile and derived probabilities
//! - [`team`] - An assembled roster
//! - [`roster`] - Roster listings and the team directory
//!
//! ## Usage
//!
//! ```ignore
//! use courtside::core::models::{position::Position, player::Player};
//!
//! let player = Player::new("Rookie", "G", Position::ShootingGuard, profile, probabilities);
//! assert_eq!(player.position_label(), "SG");
//! ```

pub mod attributes;
pub mod player;
pub mod position;
pub mod roster;
pub mod stats;
pub mod team;
