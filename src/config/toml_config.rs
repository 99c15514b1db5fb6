use crate::core::transform::TransformSpec;
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_field_lists, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub settings: Option<SettingsConfig>,
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub data_dir: Option<String>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub name: String,
    pub input: String,
    pub output: Option<String>,
    pub identifier: String,
    pub booleans: Option<Vec<String>>,
    pub integers: Option<Vec<String>>,
    pub strict: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("settings.data_dir", self.data_dir())?;

        if self.datasets.is_empty() {
            return Err(EtlError::MissingConfigError {
                field: "dataset".to_string(),
            });
        }

        for dataset in &self.datasets {
            validate_non_empty_string("dataset.name", &dataset.name)?;
            validate_non_empty_string("dataset.input", &dataset.input)?;
            validate_non_empty_string("dataset.identifier", &dataset.identifier)?;
            validate_field_lists(
                &format!("dataset.{}", dataset.name),
                &dataset.identifier,
                dataset.booleans.as_deref().unwrap_or(&[]),
                dataset.integers.as_deref().unwrap_or(&[]),
            )?;
        }

        Ok(())
    }

    pub fn data_dir(&self) -> &str {
        self.settings
            .as_ref()
            .and_then(|s| s.data_dir.as_deref())
            .unwrap_or(".")
    }

    pub fn strict_default(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|s| s.strict)
            .unwrap_or(false)
    }

    /// 取得所有資料集的轉換規格
    pub fn transform_specs(&self) -> Vec<TransformSpec> {
        self.datasets
            .iter()
            .map(|dataset| TransformSpec {
                name: dataset.name.clone(),
                input_file: dataset.input.clone(),
                output_file: dataset
                    .output
                    .clone()
                    .unwrap_or_else(|| default_output_name(&dataset.input)),
                identifier_field: dataset.identifier.clone(),
                boolean_fields: dataset.booleans.clone().unwrap_or_default(),
                integer_fields: dataset.integers.clone().unwrap_or_default(),
                strict: dataset.strict.unwrap_or_else(|| self.strict_default()),
            })
            .collect()
    }
}

/// mounts.json → mounts-new.json
fn default_output_name(input: &str) -> String {
    match input.strip_suffix(".json") {
        Some(stem) => format!("{}-new.json", stem),
        None => format!("{}-new", input),
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        self.data_dir()
    }

    fn strict(&self) -> bool {
        self.strict_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
