//! # alerthub-worker
//!
//! Periodic background tasks: the scheduled alert scan that drives the
//! whole notification pipeline, and the maintenance sweep that reports
//! stale pending account updates.

pub mod scheduler;

pub use scheduler::CronScheduler;
