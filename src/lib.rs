//! Spirit is a minimal Procfile-based process supervisor for Unix-like
//! operating systems. It starts each declared process as a detached
//! background daemon through the external `daemon(1)` helper, tracks it
//! via on-disk pid files, and provides a small CLI to start, stop,
//! restart, and report the liveness of every entry.

/// CLI interface.
pub mod cli;

/// Environment-file (.env) loading.
pub mod env_file;

/// Error handling.
pub mod error;

/// Daemonizing-helper invocation.
pub mod launcher;

/// Lifecycle controller.
pub mod lifecycle;

/// Log viewing and tailing.
pub mod logs;

/// Pid-file reading and liveness probing.
pub mod pid;

/// Procfile manifest parsing.
pub mod procfile;

/// Process descriptors.
pub mod process;

/// Process registry.
pub mod registry;
