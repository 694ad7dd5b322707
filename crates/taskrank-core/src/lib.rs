//! # taskrank Core Library
//!
//! This library provides the task prioritization engine behind the taskrank
//! student planner. Hosts (the CLI here, a mobile app backed by a REST API
//! elsewhere) load the active task list and ask the engine what to do next.
//!
//! ## Architecture
//!
//! - **Priority**: Pure Eisenhower-matrix ranking. Takes a task slice and a
//!   reference date, returns a total order plus an optional quadrant grouping
//! - **Task**: Forgiving task record type; malformed fields degrade to defaults
//! - **Storage**: JSON task file behind the [`TaskSource`] contract and
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`rank`]: Classify and order tasks
//! - [`group`]: Bucket a ranked list by [`Quadrant`]
//! - [`JsonTaskStore`]: Local task persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod priority;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, StoreError};
pub use priority::{group, local_today, next_up, rank, rank_iso, Quadrant, QuadrantGroups, RankedTask};
pub use storage::{Config, JsonTaskStore, TaskSource};
pub use task::{active_tasks, Level, Task};
