use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting listing ETL run");
        self.monitor.log_stats("Start");

        // Extract
        tracing::info!("Fetching listing pages...");
        let entries = self.pipeline.extract().await?;
        tracing::info!("Extracted {} entries", entries.len());
        self.monitor.log_stats("Extract");

        // Transform
        let sorted = self.pipeline.transform(entries).await?;
        tracing::info!("Sorted {} entries by price", sorted.len());
        self.monitor.log_stats("Transform");

        // Load
        tracing::info!("Writing spreadsheet...");
        let output_path = self.pipeline.load(sorted).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Entry;
    use crate::utils::error::EtlError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
        fail_extract: bool,
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Vec<Entry>> {
            self.calls.lock().unwrap().push("extract");
            if self.fail_extract {
                return Err(EtlError::ParseError {
                    url: "http://example.com/".to_string(),
                    message: "boom".to_string(),
                });
            }
            Ok(vec![Entry::new(2, "2012"), Entry::new(1, "2011")])
        }

        async fn transform(&self, entries: Vec<Entry>) -> Result<Vec<Entry>> {
            self.calls.lock().unwrap().push("transform");
            Ok(entries)
        }

        async fn load(&self, entries: Vec<Entry>) -> Result<String> {
            self.calls.lock().unwrap().push("load");
            Ok(format!("{} rows", entries.len()))
        }
    }

    #[tokio::test]
    async fn test_runs_phases_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::default());

        let output = engine.run().await.unwrap();

        assert_eq!(output, "2 rows");
        assert_eq!(
            *engine.pipeline.calls.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_fatal_error_skips_later_phases() {
        let engine = EtlEngine::new(RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(engine.run().await.is_err());
        assert_eq!(*engine.pipeline.calls.lock().unwrap(), vec!["extract"]);
    }
}
