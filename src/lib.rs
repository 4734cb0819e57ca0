//! # Tasker
//!
//! An interactive, in-memory task manager. Tasks carry a description and one
//! of three priority tiers; the manager announces (pops) them strictly in
//! HIGH, MEDIUM, LOW order and FIFO within a tier.
//!
//! ## Architecture Overview
//!
//! - **[`task`]**: the ordered queue, task records and the three-tier
//!   [`TaskManager`]
//! - **[`cli`]**: argument parsing, configuration discovery and the
//!   interactive menu loop
//! - **[`env`]**: path and logging constants
//!
//! ## Quick Start
//!
//! ```rust
//! use tasker::{Priority, TaskManager};
//!
//! let mut manager = TaskManager::new();
//! manager.add_task("Write report", Priority::High).unwrap();
//! manager.add_task("Buy milk", Priority::Low).unwrap();
//!
//! let announced = manager.announce(1);
//! assert_eq!(announced[0].description(), "Write report");
//! ```

/// Three-tier priority task management.
///
/// Provides the FIFO [`OrderedQueue`], the immutable [`Task`] record and the
/// [`TaskManager`] operations: add, remove, announce and list.
pub mod task;

/// Environment constants and path utilities.
pub mod env;

/// Command line interface: arguments, configuration and the menu loop.
pub mod cli;

pub use task::{OrderedQueue, Priority, QueueError, Task, TaskError, TaskManager};
