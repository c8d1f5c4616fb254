use aqi_tracker::{
    config::ConfigLoader, snapshot::SnapshotWriter, CatalogKind, Dashboard,
};

#[test]
fn export_writes_one_file_per_region() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dashboard = Dashboard::new(CatalogKind::Metros);
    let writer = SnapshotWriter::new(temp.path(), CatalogKind::Metros);

    let frames = dashboard.frames().expect("frames");
    let paths = writer.write_all(&frames).expect("export succeeds");
    assert_eq!(paths.len(), 7);

    let delhi = temp.path().join("metros").join("new_delhi.json");
    assert!(delhi.exists(), "expected {} to exist", delhi.display());

    let data = std::fs::read_to_string(delhi).unwrap();
    let value: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(value["city"], "New Delhi");
}

#[test]
fn shipped_config_loads() {
    let loader = ConfigLoader::new(env!("CARGO_MANIFEST_DIR"));
    let config = loader.load("config/dashboard.yaml").expect("config parses");
    assert_eq!(config.catalog, CatalogKind::StateCapitals);
    assert_eq!(config.server.port, 8501);
}

#[test]
fn config_from_tempdir() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("custom.yaml"), "catalog: metros\n").unwrap();
    let config = ConfigLoader::new(temp.path())
        .load("custom.yaml")
        .expect("config parses");
    assert_eq!(config.catalog, CatalogKind::Metros);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn malformed_config_is_a_parse_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("bad.yaml"), "server: [1, 2\n").unwrap();
    let err = ConfigLoader::new(temp.path()).load("bad.yaml").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config"));
}
