pub use crate::app::pipelines::listing_pipeline::ListingPipeline;
