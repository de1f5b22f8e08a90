//! Access to external statistics sources.
//!
//! The [`traits::StatsSource`] trait is the seam between this library and
//! whatever publishes rosters and box scores. [`csv::CsvStatsSource`] reads
//! exported CSV tables from disk; [`memory::MemoryStatsSource`] serves data
//! that is already in memory.

pub mod csv;
pub mod memory;
pub mod traits;
