use cropguard::config::ClassifierConfig;
use cropguard::models::Disease;
use cropguard::{global, EnvironmentalReading, RawReading, RiskLabel, RiskLevel};

const ALWAYS_HIGH_FOREST: &str = r#"{
    "format_version": 1,
    "features": ["temperature", "humidity", "rainfall", "soil_pH"],
    "trees": [ { "nodes": [ { "leaf": { "proba": [0.1, 0.9] } } ] } ]
}"#;

// One test: the classifier slot is process-wide.
#[test]
fn predict_through_process_wide_classifier() {
    let wilt = EnvironmentalReading::new(32.0, 50.0, 1.0).with_soil_ph(6.5);
    let healthy_rice = RawReading {
        temperature_c: 25.0,
        humidity_percent: 80.0,
        rainfall_mm: Some(10.0),
        soil_ph: None,
    }
    .resolve();

    // Not initialized: rules only
    let v = cropguard::predict("Tomato", "Wilting leaves", &wilt);
    assert_eq!(v.disease, Disease::BacterialWilt);
    assert_eq!(v.risk, RiskLevel::High);
    assert_eq!(v.confidence, 0.85);

    // Missing artifact: classifier permanently unavailable
    let unavailable = global::init(&ClassifierConfig::with_model_path(
        "/nonexistent/cropguard/model.json",
    ));
    assert!(!unavailable.is_available());
    let v = cropguard::predict("Rice", "none", &healthy_rice);
    assert_eq!(v.disease, Disease::Healthy);
    assert_eq!(v.risk, RiskLevel::Low);
    global::shutdown();

    // Loaded model escalates without touching disease or confidence
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), ALWAYS_HIGH_FOREST).unwrap();
    let classifier = global::init(&ClassifierConfig::with_model_path(file.path()));
    assert!(classifier.is_available());

    let v = cropguard::predict("Rice", "none", &healthy_rice);
    assert_eq!(v.disease, Disease::Healthy);
    assert_eq!(v.risk, RiskLevel::High);
    assert_eq!(v.confidence, 0.95);

    let v = cropguard::predict("rice", "brown specks", &healthy_rice);
    assert_eq!(v.disease, Disease::BrownSpot);
    assert_eq!(v.risk, RiskLevel::High);
    assert_eq!(v.confidence, 0.78);

    // Non-finite input is a transient fault, not a crash
    let broken = EnvironmentalReading::new(f64::NAN, 80.0, 0.0);
    let v = cropguard::predict("rice", "yellow", &broken);
    assert_eq!(v.disease, Disease::RiceBlast);
    assert_eq!(v.risk, RiskLevel::High);

    let status = classifier.status();
    assert_eq!(status.inferences, 3);
    assert_eq!(status.faults, 1);
    assert_eq!(
        global::classify(&cropguard::logic::FeatureVector::build(&broken)),
        RiskLabel::Error
    );

    global::shutdown();
    assert!(global::current().is_none());
}
