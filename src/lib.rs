pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::DataDirStorage, CliConfig};
pub use core::{engine::RewriteEngine, pipeline::RewritePipeline, transform::TransformSpec};
pub use utils::error::{EtlError, Result};
