//! Filesystem helpers for storesmith.

mod atomic;

pub use atomic::atomic_write_file;
