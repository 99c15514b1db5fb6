use crate::core::transform::{rekey_records, TransformSpec};
use crate::core::{ConfigProvider, Pipeline, Record, RekeyedData, Storage};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

pub struct RewritePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    spec: TransformSpec,
}

impl<S: Storage, C: ConfigProvider> RewritePipeline<S, C> {
    pub fn new(storage: S, config: C, mut spec: TransformSpec) -> Self {
        // CLI/config strict flag widens the per-dataset setting
        spec.strict = spec.strict || config.strict();
        Self {
            storage,
            config,
            spec,
        }
    }

    pub fn spec(&self) -> &TransformSpec {
        &self.spec
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RewritePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading input file: {}", self.spec.input_file);
        let bytes = self.storage.read_file(&self.spec.input_file).await?;

        let json_data: Value = serde_json::from_slice(&bytes)?;

        let items = match json_data {
            Value::Array(items) => items,
            other => {
                return Err(EtlError::MalformedInput {
                    message: format!(
                        "{}: expected a top-level JSON array, got {}",
                        self.spec.input_file,
                        type_name(&other)
                    ),
                })
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(data) => records.push(Record { data }),
                other => {
                    return Err(EtlError::MalformedInput {
                        message: format!(
                            "{}: element {} is not an object, got {}",
                            self.spec.input_file,
                            index,
                            type_name(&other)
                        ),
                    })
                }
            }
        }

        tracing::debug!("Parsed {} records", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<RekeyedData> {
        rekey_records(data, &self.spec)
    }

    async fn load(&self, result: RekeyedData) -> Result<String> {
        let json_data = serde_json::to_vec(&Value::Object(result.entries))?;

        tracing::debug!(
            "Writing {} bytes to {}",
            json_data.len(),
            self.spec.output_file
        );
        self.storage
            .write_file(&self.spec.output_file, &json_data)
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.data_dir(),
            self.spec.output_file
        ))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
