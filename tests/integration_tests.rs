use gamedata_etl::{
    CliConfig, DataDirStorage, EtlError, RewriteEngine, RewritePipeline, TransformSpec,
};
use serde_json::json;
use tempfile::TempDir;

fn test_config(data_dir: &str) -> CliConfig {
    CliConfig {
        dataset: "all".to_string(),
        data_dir: data_dir.to_string(),
        strict: false,
        verbose: false,
    }
}

async fn run_dataset(
    data_dir: &str,
    config: CliConfig,
    spec: TransformSpec,
) -> gamedata_etl::Result<String> {
    let storage = DataDirStorage::new(data_dir.to_string());
    let pipeline = RewritePipeline::new(storage, config, spec);
    RewriteEngine::new(pipeline).run().await
}

#[tokio::test]
async fn test_end_to_end_mounts_rewrite() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let input = json!([
        {"id": 1, "premium": "yes", "speed": "450", "name": "Horse"},
        {"id": 2, "premium": "no", "speed": "300", "name": "Donkey"}
    ]);
    std::fs::write(
        temp_dir.path().join("mounts.json"),
        serde_json::to_vec(&input).unwrap(),
    )
    .unwrap();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::mounts()).await;
    assert!(result.is_ok());

    let output_path = temp_dir.path().join("mounts-new.json");
    assert!(output_path.exists());

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&output_path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "1": {"premium": true, "speed": 450, "name": "Horse"},
            "2": {"premium": false, "speed": 300, "name": "Donkey"}
        })
    );
}

#[tokio::test]
async fn test_end_to_end_outfits_rewrite() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let input = json!([
        {"looktype": 128, "enabled": "yes", "unlocked": "no", "premium": "yes", "name": "Citizen"}
    ]);
    std::fs::write(
        temp_dir.path().join("outfits.json"),
        serde_json::to_vec(&input).unwrap(),
    )
    .unwrap();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::outfits()).await;
    assert!(result.is_ok());

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("outfits-new.json")).unwrap())
            .unwrap();
    assert_eq!(
        written,
        json!({
            "128": {"enabled": true, "unlocked": false, "premium": true, "name": "Citizen"}
        })
    );
}

#[tokio::test]
async fn test_end_to_end_both_datasets() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    std::fs::write(
        temp_dir.path().join("mounts.json"),
        serde_json::to_vec(&json!([
            {"id": 10, "premium": "yes", "speed": "800", "name": "Dragon"}
        ]))
        .unwrap(),
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("outfits.json"),
        serde_json::to_vec(&json!([
            {"looktype": 130, "enabled": "no", "unlocked": "yes", "premium": "no", "name": "Mage"}
        ]))
        .unwrap(),
    )
    .unwrap();

    let config = test_config(&data_dir);
    for spec in config.selected_specs().unwrap() {
        let result = run_dataset(&data_dir, config.clone(), spec).await;
        assert!(result.is_ok());
    }

    assert!(temp_dir.path().join("mounts-new.json").exists());
    assert!(temp_dir.path().join("outfits-new.json").exists());
}

#[tokio::test]
async fn test_missing_field_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    // Second record lacks the speed field; the whole batch must fail
    let input = json!([
        {"id": 1, "premium": "yes", "speed": "450", "name": "Horse"},
        {"id": 2, "premium": "no", "name": "Donkey"}
    ]);
    std::fs::write(
        temp_dir.path().join("mounts.json"),
        serde_json::to_vec(&input).unwrap(),
    )
    .unwrap();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::mounts()).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        EtlError::MissingField { ref field, record: 1 } if field == "speed"
    ));
    assert!(!temp_dir.path().join("mounts-new.json").exists());
}

#[tokio::test]
async fn test_duplicate_identifiers_keep_last_record() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let input = json!([
        {"id": 5, "premium": "yes", "speed": "450", "name": "First"},
        {"id": 5, "premium": "no", "speed": "300", "name": "Second"}
    ]);
    std::fs::write(
        temp_dir.path().join("mounts.json"),
        serde_json::to_vec(&input).unwrap(),
    )
    .unwrap();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::mounts()).await;
    assert!(result.is_ok());

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("mounts-new.json")).unwrap())
            .unwrap();
    assert_eq!(
        written,
        json!({
            "5": {"premium": false, "speed": 300, "name": "Second"}
        })
    );
}

#[tokio::test]
async fn test_strict_mode_fails_on_duplicates_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let input = json!([
        {"id": 5, "premium": "yes", "speed": "450", "name": "First"},
        {"id": 5, "premium": "no", "speed": "300", "name": "Second"}
    ]);
    std::fs::write(
        temp_dir.path().join("mounts.json"),
        serde_json::to_vec(&input).unwrap(),
    )
    .unwrap();

    let mut config = test_config(&data_dir);
    config.strict = true;

    let result = run_dataset(&data_dir, config, TransformSpec::mounts()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, EtlError::DuplicateIdentifier { .. }));
    assert!(!temp_dir.path().join("mounts-new.json").exists());
}

#[tokio::test]
async fn test_malformed_input_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    std::fs::write(
        temp_dir.path().join("mounts.json"),
        br#"{"id": 1, "premium": "yes"}"#,
    )
    .unwrap();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::mounts()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, EtlError::MalformedInput { .. }));
    assert!(!temp_dir.path().join("mounts-new.json").exists());
}

#[tokio::test]
async fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let result = run_dataset(&data_dir, test_config(&data_dir), TransformSpec::outfits()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, EtlError::IoError(_)));
}
