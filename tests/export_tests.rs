mod common;
use common::{init_db_with_data, rl, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 record(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,revenue,fuel,fuel_type,kilometers,fuel_efficiency,variable_costs,net_profit")
    );
    assert_eq!(lines.count(), 2);
    assert!(content.contains("310.50"));
    assert!(content.contains("ethanol"));
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    rl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["revenue"], 250.0);
    assert_eq!(rows[0]["kilometers"], 120.0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rl().args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_range", "csv");

    rl().args(["--db", &db_path, "export", "--file", &out, "--range", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
