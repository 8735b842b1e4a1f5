pub mod listing_pipeline;
