pub mod cli;
pub mod toml_config;

use crate::core::transform::TransformSpec;
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gamedata-etl")]
#[command(about = "Rewrites game-data JSON arrays into identifier-keyed objects")]
pub struct CliConfig {
    /// Dataset to rewrite: mounts, outfits or all
    #[arg(long, default_value = "all")]
    pub dataset: String,

    /// Directory holding the input files; output files are written next to them
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// Fail on duplicate identifiers instead of keeping the last record
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn selected_specs(&self) -> Result<Vec<TransformSpec>> {
        if self.dataset == "all" {
            return Ok(vec![TransformSpec::mounts(), TransformSpec::outfits()]);
        }

        TransformSpec::builtin(&self.dataset)
            .map(|spec| vec![spec])
            .ok_or_else(|| EtlError::InvalidConfigValueError {
                field: "dataset".to_string(),
                value: self.dataset.clone(),
                reason: "Unknown dataset. Valid datasets: mounts, outfits, all".to_string(),
            })
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        self.selected_specs().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dataset: &str) -> CliConfig {
        CliConfig {
            dataset: dataset.to_string(),
            data_dir: ".".to_string(),
            strict: false,
            verbose: false,
        }
    }

    #[test]
    fn test_all_selects_both_datasets() {
        let specs = config_for("all").selected_specs().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "mounts");
        assert_eq!(specs[1].name, "outfits");
    }

    #[test]
    fn test_single_dataset_selection() {
        let specs = config_for("outfits").selected_specs().unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].input_file, "outfits.json");
    }

    #[test]
    fn test_unknown_dataset_fails_validation() {
        assert!(config_for("spells").validate().is_err());
        assert!(config_for("mounts").validate().is_ok());
    }
}
