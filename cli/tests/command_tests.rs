//! Command tests for the crop advisor binaries
//!
//! Drives each command with explicit arguments, configuration and clock, and
//! checks the JSON document and exit code it produces.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use crop_advisor_cli::commands::{product_catalog, recommendations, risk_assessment};
use crop_advisor_cli::config::{CatalogConfig, Config, OutputConfig};
use crop_advisor_cli::CommandResult;
use serde_json::{json, Value};
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 6, 30, 0).unwrap()
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be JSON")
}

fn run_risk(path: &Path, config: &Config) -> CommandResult {
    risk_assessment::run(["risk-assessment", path.to_str().unwrap()], config, now())
}

fn run_recommendations(path: &Path, config: &Config) -> CommandResult {
    recommendations::run(["recommendations", path.to_str().unwrap()], config, now())
}

fn farm_input() -> Value {
    json!({
        "weatherData": [
            {"temperature": 26, "humidity": 85, "rainfall": 12},
            {"temperature": 31, "humidity": 78, "rainfall": 0.5},
            {"temperature": 24, "humidity": 90, "rainfall": 22}
        ],
        "soilData": {
            "nutrients": {"nitrogen": 45, "phosphorus": 30, "potassium": 50},
            "structure": {"organicMatter": 1.8, "compaction": 35},
            "biology": {"microbialActivity": 40, "earthworms": 15}
        },
        "crops": [{"type": "Cotton"}, {"type": "Chickpea"}]
    })
}

fn assert_error(result: &CommandResult) -> String {
    assert_eq!(result.exit_code, 1, "expected failure, got {}", result.output);
    let payload = parse_payload(&result.output);
    let object = payload.as_object().expect("error envelope is an object");
    assert_eq!(object.len(), 1, "envelope carries only the message");
    payload["error"].as_str().expect("error message").to_string()
}

// ============================================================================
// risk-assessment
// ============================================================================

#[test]
fn risk_assessment_writes_assessment() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_json(&dir, "farm.json", &farm_input());

    let result = run_risk(&input, &Config::default());
    assert_eq!(result.exit_code, 0, "{}", result.output);
    assert!(!result.output.contains('\n'), "compact output by default");

    let payload = parse_payload(&result.output);
    assert!(payload["cropRisks"]["Cotton"]["pest"]["overall"].is_number());
    assert!(payload["cropRisks"]["Chickpea"]["climate"]["factors"]["heat"].is_number());
    assert!(payload["soilHealth"]["factors"]["biology"].is_number());
    assert_eq!(payload["timestamp"], "2025-03-01T06:30:00Z");

    let cotton = payload["cropRisks"]["Cotton"]["disease"]["overall"].as_f64().unwrap();
    let chickpea = payload["cropRisks"]["Chickpea"]["disease"]["overall"].as_f64().unwrap();
    assert_eq!(payload["overallRisk"]["disease"].as_f64().unwrap(), cotton.max(chickpea));
    Ok(())
}

#[test]
fn risk_assessment_pretty_prints_when_configured() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_json(&dir, "farm.json", &farm_input());
    let config = Config {
        output: OutputConfig { pretty: true },
        ..Config::default()
    };

    let result = run_risk(&input, &config);
    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains('\n'));
    parse_payload(&result.output);
    Ok(())
}

#[test]
fn risk_assessment_without_argument_is_usage_error() {
    let result = risk_assessment::run(["risk-assessment"], &Config::default(), now());
    assert_eq!(assert_error(&result), "No input file provided");
}

#[test]
fn risk_assessment_help_exits_cleanly() {
    let result = risk_assessment::run(["risk-assessment", "--help"], &Config::default(), now());
    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("INPUT"));
}

#[test]
fn risk_assessment_missing_file_is_input_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let result = run_risk(&dir.path().join("absent.json"), &Config::default());
    assert!(assert_error(&result).starts_with("Cannot read input file"));
    Ok(())
}

#[test]
fn risk_assessment_invalid_json_is_input_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("farm.json");
    fs::write(&path, "{\"weatherData\": [")?;

    let result = run_risk(&path, &Config::default());
    assert!(assert_error(&result).starts_with("Malformed JSON"));
    Ok(())
}

#[test]
fn risk_assessment_empty_weather_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_json(
        &dir,
        "farm.json",
        &json!({"weatherData": [], "soilData": {}, "crops": [{"type": "Cotton"}]}),
    );

    let message = assert_error(&run_risk(&input, &Config::default()));
    assert!(message.contains("weather"), "{}", message);
    Ok(())
}

#[test]
fn risk_assessment_without_crops_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut input = farm_input();
    input["crops"] = json!([]);
    let path = write_json(&dir, "farm.json", &input);

    assert_error(&run_risk(&path, &Config::default()));
    Ok(())
}

// ============================================================================
// recommendations
// ============================================================================

#[test]
fn recommendations_follow_risk_assessment() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let farm = write_json(&dir, "farm.json", &farm_input());
    let assessment = parse_payload(&run_risk(&farm, &Config::default()).output);

    let request = write_json(
        &dir,
        "request.json",
        &json!({
            "farmData": {"crops": [{"type": "Cotton"}, {"type": "Chickpea"}, {"type": "Wheat"}]},
            "riskAssessment": assessment
        }),
    );

    let result = run_recommendations(&request, &Config::default());
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["timestamp"], "2025-03-01T06:30:00Z");

    let recs = payload["recommendations"].as_array().unwrap();
    assert!(!recs.is_empty());
    for crop in ["Cotton", "Chickpea"] {
        let count = recs.iter().filter(|r| r["cropType"] == crop).count();
        assert!(count <= 3, "{} has {} recommendations", crop, count);
    }
    assert!(recs.iter().all(|r| r["cropType"] != "Wheat"));

    let scores: Vec<f64> = recs.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    let date = recs[0]["applicationTiming"]["date"].as_str().unwrap();
    assert!(date > "2025-03-01" && date <= "2025-03-15", "{}", date);
    Ok(())
}

#[test]
fn recommendations_use_configured_catalog() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_json(
        &dir,
        "products.json",
        &json!([{
            "id": 7,
            "name": "TrichoShield",
            "type": "Disease Control",
            "efficacy": 70,
            "compatibility": ["Wheat"],
            "applicationTiming": "Apply at sowing"
        }]),
    );
    let request = write_json(
        &dir,
        "request.json",
        &json!({
            "farmData": {"crops": [{"type": "Wheat"}]},
            "riskAssessment": {
                "cropRisks": {"Wheat": {"disease": {"overall": 90}}}
            }
        }),
    );
    let config = Config {
        catalog: CatalogConfig {
            path: Some(catalog),
        },
        ..Config::default()
    };

    let result = run_recommendations(&request, &config);
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    let recs = payload["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["product"]["name"], "TrichoShield");
    // 30 + 90 * 0.5 + 70 * 0.2
    assert!((recs[0]["score"].as_f64().unwrap() - 89.0).abs() < 1e-9);
    assert_eq!(recs[0]["applicationTiming"]["window"], "Next 3 Days");
    assert_eq!(recs[0]["applicationTiming"]["urgency"], "High");
    assert_eq!(recs[0]["applicationTiming"]["date"], "2025-03-04");
    Ok(())
}

#[test]
fn recommendations_reject_invalid_catalog() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_json(
        &dir,
        "products.json",
        &json!([{
            "id": 1,
            "name": "",
            "type": "Soil Health",
            "efficacy": 60,
            "compatibility": ["All crops"],
            "applicationTiming": "Pre-sowing"
        }]),
    );
    let request = write_json(&dir, "request.json", &json!({"farmData": {"crops": []}}));
    let config = Config {
        catalog: CatalogConfig {
            path: Some(catalog),
        },
        ..Config::default()
    };

    let message = assert_error(&run_recommendations(&request, &config));
    assert!(message.starts_with("Invalid product catalog"), "{}", message);
    Ok(())
}

#[test]
fn recommendations_with_crops_but_no_assessment_fail() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let request = write_json(&dir, "request.json", &json!({"farmData": {"crops": [{"type": "Cotton"}]}}));

    let message = assert_error(&run_recommendations(&request, &Config::default()));
    assert!(message.contains("riskAssessment"), "{}", message);
    Ok(())
}

#[test]
fn recommendations_with_assessment_missing_crop_risks_fail() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let request = write_json(
        &dir,
        "request.json",
        &json!({
            "farmData": {"crops": [{"type": "Cotton"}]},
            "riskAssessment": {"soilHealth": {"overall": 40}}
        }),
    );

    let message = assert_error(&run_recommendations(&request, &Config::default()));
    assert!(message.contains("cropRisks"), "{}", message);
    Ok(())
}

#[test]
fn recommendations_without_crops_or_assessment_are_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let request = write_json(&dir, "request.json", &json!({"farmData": {"crops": []}}));

    let result = run_recommendations(&request, &Config::default());
    assert_eq!(result.exit_code, 0, "{}", result.output);
    assert_eq!(parse_payload(&result.output)["recommendations"], json!([]));
    Ok(())
}

#[test]
fn recommendations_accept_assessment_fields_they_do_not_use() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let request = write_json(
        &dir,
        "request.json",
        &json!({
            "farmData": {"crops": [{"type": "Cotton"}]},
            "riskAssessment": {
                "cropRisks": {"Cotton": {"pest": {"overall": 90}}},
                "timestamp": "2025-03-01T12:34:56.789012",
                "overallRisk": {"pest": 90}
            }
        }),
    );

    let result = run_recommendations(&request, &Config::default());
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    let recs = payload["recommendations"].as_array().unwrap();
    assert_eq!(recs[0]["product"]["name"], "BioDefend Plus");
    assert_eq!(recs[0]["applicationTiming"]["urgency"], "High");
    Ok(())
}

#[test]
fn recommendations_without_argument_is_usage_error() {
    let result = recommendations::run(["recommendations"], &Config::default(), now());
    assert_eq!(assert_error(&result), "No input file provided");
}

// ============================================================================
// product-catalog
// ============================================================================

fn catalog_names(args: &[&str]) -> Vec<String> {
    let mut argv = vec!["product-catalog"];
    argv.extend_from_slice(args);
    let result = product_catalog::run(argv, &Config::default(), now());
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["timestamp"], "2025-03-01T06:30:00Z");
    payload["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn product_catalog_lists_builtin_products() {
    assert_eq!(catalog_names(&[]).len(), 6);
}

#[test]
fn product_catalog_filters() {
    assert_eq!(
        catalog_names(&["--type", "pest-control"]),
        vec!["BioDefend Plus", "NemControl Bio"]
    );
    assert_eq!(
        catalog_names(&["--min-efficacy", "85"]),
        vec!["BioDefend Plus", "MildewGuard Bio"]
    );
    assert_eq!(
        catalog_names(&["--crop", "Wheat"]),
        vec!["MildewGuard Bio", "SoilVital Pro", "BioRoot Stimulator"]
    );
    assert_eq!(
        catalog_names(&["--type", "Disease Control", "--crop", "Vegetables"]),
        vec!["BlightShield Organic"]
    );
}

#[test]
fn product_catalog_rejects_unknown_type() {
    let result = product_catalog::run(
        ["product-catalog", "--type", "fertilizer"],
        &Config::default(),
        now(),
    );
    let message = assert_error(&result);
    assert!(message.contains("fertilizer"), "{}", message);
}
