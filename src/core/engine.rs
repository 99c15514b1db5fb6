use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RewriteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RewriteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("Transforming records...");
        let rekeyed = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Re-keyed {} records into {} entries",
            rekeyed.record_count,
            rekeyed.entries.len()
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(rekeyed).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
