pub mod etl;
pub mod pagination;
pub mod pipeline;

pub use crate::domain::model::{Entry, PageExtraction};
pub use crate::domain::ports::{ConfigProvider, PageSource, Pipeline, Storage};
pub use crate::utils::error::Result;
