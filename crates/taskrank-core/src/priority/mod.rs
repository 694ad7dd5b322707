//! Eisenhower-matrix prioritization.
//!
//! This module provides:
//! - Importance and urgency scoring per task
//! - Quadrant classification
//! - Composite ranking into a total "do next" order
//! - Grouping of a ranked list by quadrant
//!
//! Everything here is pure: no I/O, no shared state, no failure modes.

mod quadrant;
mod rank;
pub mod scoring;

pub use quadrant::Quadrant;
pub use rank::{group, local_today, next_up, rank, rank_iso, QuadrantGroups, RankedTask};
