use fittrack_core::{default_packages, load_packages, save_packages};
use std::fs;

#[test]
fn test_save_and_load_packages() {
    let path = std::env::temp_dir().join(format!("fittrack_packages_{}.json", std::process::id()));

    let packages = default_packages();
    save_packages(&packages, &path).expect("kunne ikke lagre pakker");

    let loaded = load_packages(&path).expect("kunne ikke laste pakker");
    assert_eq!(loaded, packages);

    // rydde opp
    fs::remove_file(&path).ok();
}

#[test]
fn test_load_reports_bad_element() {
    let path = std::env::temp_dir().join(format!("fittrack_bad_{}.json", std::process::id()));
    fs::write(
        &path,
        r#"[{"workout_type":"RUN","data":[1,1,1]},{"workout_type":"SWM","data":"oops"}]"#,
    )
    .unwrap();

    let err = load_packages(&path).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("[1].data"), "melding: {msg}");

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file() {
    let err = load_packages("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("here.json"));
}
