//! Cron jobs for automated maintenance tasks.

pub mod session_sweep;
