//! # OS Helper Operations
//!
//! The OS-facing side of the hopper pipeline helpers: blocking child-process
//! execution, cache host selection, idempotent filesystem setup, and tar/gzip
//! bundling of product files.
//!
//! Every operation here is synchronous and stateless; callers own retry
//! policy and any deadline around these calls.

pub mod archive;
pub mod cache;
pub mod command;
pub mod fs_ops;

pub use archive::{gzip_files, tar_files};
pub use cache::{PingProber, Prober, select_cache_host, select_host};
pub use command::{run, run_in};
pub use fs_ops::{create_directory, create_link};
