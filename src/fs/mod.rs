//! Filesystem utilities for stackenv.

pub mod atomic;

pub use atomic::atomic_write_file;
