use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_reports_unavailable_outside_browser() {
    assert_eq!(save_json("voltx_test", &vec![1, 2, 3]), Err(StorageError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_is_none() {
    assert_eq!(load_json::<Vec<i32>>("voltx_test"), None);
}

#[test]
fn save_reports_encode_failure_before_touching_storage() {
    let mut bad = std::collections::HashMap::new();
    bad.insert((1, 2), "non-string key");
    assert!(matches!(save_json("voltx_test", &bad), Err(StorageError::Encode(_))));
}
