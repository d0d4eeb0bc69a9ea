use beautifier_config::{GradientLibrary, GradientStore, MAX_CUSTOM_GRADIENTS};

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());
    assert!(store.load().is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());

    let mut library = GradientLibrary::new();
    library.add("linear-gradient(45deg, #3b82f6 0%, #8b5cf6 100%)");
    library.add("#09090b");
    store.save(&library).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, library);
    assert_eq!(loaded.entries()[0], "#09090b");
}

#[test]
fn test_record_is_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());
    let library = GradientLibrary::from_entries(vec!["a".into(), "b".into()]);
    store.save(&library).unwrap();

    assert!(store.path().ends_with("custom_gradients.json"));
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, r#"["a","b"]"#);
}

#[test]
fn test_malformed_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());
    std::fs::write(store.path(), "{\"not\": \"an array\"").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());
    std::fs::write(store.path(), "[1, 2, 3]").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_oversized_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let store = GradientStore::new(dir.path());
    let entries: Vec<String> = (0..15).map(|i| format!("#0000{i:02}")).collect();
    std::fs::write(store.path(), serde_json::to_string(&entries).unwrap()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), MAX_CUSTOM_GRADIENTS);
    assert_eq!(loaded.entries()[0], "#000000");
}

#[test]
fn test_save_creates_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join(".data");
    let store = GradientStore::new(&nested);
    let mut library = GradientLibrary::new();
    library.add("#ffffff");
    store.save(&library).unwrap();
    assert_eq!(store.load().entries(), ["#ffffff"]);
}
