pub mod engine;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{Record, RekeyedData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
