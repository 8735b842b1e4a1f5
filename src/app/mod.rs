// Application layer: pipelines wiring adapters to the ETL ports.

pub mod pipelines;
