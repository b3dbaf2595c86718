use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn stockroom(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("config.json"))
        .arg("--data")
        .arg(dir.join("inventory.csv"));
    cmd
}

fn add(dir: &Path, name: &str, quantity: i64) {
    stockroom(dir)
        .args(["add", "--name", name, "--category", "Hardware"])
        .args(["--quantity", &quantity.to_string(), "--price", "0.25"])
        .assert()
        .success();
}

#[test]
fn add_saves_and_list_shows_it() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    stockroom(dir)
        .args(["add", "--name", "Bolt", "--quantity", "5", "--price", "0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added with ID 1: Bolt"));

    assert_eq!(
        fs::read_to_string(dir.join("inventory.csv")).unwrap(),
        "1,Bolt,,,5,0.1\n"
    );

    stockroom(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bolt"))
        .stdout(predicate::str::contains("Page 1 / 1  (1 item(s))"));
}

#[test]
fn empty_inventory_lists_as_empty() {
    let temp = TempDir::new().unwrap();
    stockroom(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory is empty."));
    assert!(!temp.path().join("inventory.csv").exists());
}

#[test]
fn remove_twice_warns_the_second_time() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt", 5);

    stockroom(dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed item 1"));
    stockroom(dir)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 1 not found"));

    assert_eq!(fs::read_to_string(dir.join("inventory.csv")).unwrap(), "");
}

#[test]
fn get_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    stockroom(temp.path())
        .args(["get", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: 9"));
}

#[test]
fn update_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt", 5);

    stockroom(dir)
        .args(["update", "1", "--quantity", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated item 1: Bolt"));

    stockroom(dir)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Hardware"))
        .stdout(predicate::str::contains("Quantity: 40"));
}

#[test]
fn search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Hex Bolt", 5);
    add(dir, "Nut", 5);

    stockroom(dir)
        .args(["search", "BOLT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hex Bolt"))
        .stdout(predicate::str::contains("Nut").not());
}

#[test]
fn low_stock_is_inclusive() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt", 5);
    add(dir, "Nut", 2);
    add(dir, "Washer", 9);

    stockroom(dir)
        .args(["low-stock", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bolt"))
        .stdout(predicate::str::contains("Nut"))
        .stdout(predicate::str::contains("Washer").not());
}

#[test]
fn import_merges_with_fresh_ids_on_collision() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt", 5);

    let incoming = dir.join("incoming.csv");
    fs::write(&incoming, "1,Nut,Hardware,Acme,10,0.05\n,Washer,,,3,0.02\n").unwrap();

    stockroom(dir)
        .arg("import")
        .arg(&incoming)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 item(s)"))
        .stdout(predicate::str::contains("id 1 already taken, stored as 2"));

    let saved = fs::read_to_string(dir.join("inventory.csv")).unwrap();
    let ids: Vec<&str> = saved
        .lines()
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn malformed_numbers_are_reported_on_load() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("inventory.csv"), "1,Bolt,,,lots,0.1\n").unwrap();

    stockroom(dir)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: invalid quantity"))
        .stdout(predicate::str::contains("Quantity: 0"));

    stockroom(dir)
        .args(["--strict", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line skipped"))
        .stdout(predicate::str::contains("Inventory is empty."));
}

#[test]
fn strict_mode_does_not_overwrite_skipped_lines() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let original = "1,Bolt,,,lots,0.1\n2,Nut,,,2,0.05\n";
    fs::write(dir.join("inventory.csv"), original).unwrap();

    stockroom(dir)
        .args(["--strict", "add", "--name", "Washer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line skipped"))
        .stdout(predicate::str::contains("Not saved: 1 line(s) skipped"));

    assert_eq!(
        fs::read_to_string(dir.join("inventory.csv")).unwrap(),
        original
    );
}

#[test]
fn export_writes_a_snapshot() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt, large", 5);

    let out = dir.join("snapshot.csv");
    stockroom(dir)
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 item(s)"));

    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "1,\"Bolt, large\",Hardware,,5,0.25\n"
    );
}

#[test]
fn config_set_is_persisted() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    stockroom(dir)
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 2"));

    stockroom(dir)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout("page-size = 2\n");

    stockroom(dir)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn list_pages_with_configured_size() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    for name in ["Bolt", "Nut", "Washer"] {
        add(dir, name, 1);
    }

    stockroom(dir)
        .args(["list", "--page-size", "2", "--page", "2", "--sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Washer"))
        .stdout(predicate::str::contains("Bolt").not())
        .stdout(predicate::str::contains("Page 2 / 2  (3 item(s))"));
}

#[test]
fn menu_adds_and_saves() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    stockroom(dir)
        .arg("menu")
        .write_stdin("2\nBolt\nHardware\nAcme\n5\n0.1\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Inventory Management ==="))
        .stdout(predicate::str::contains("Added with ID 1: Bolt"));

    assert_eq!(
        fs::read_to_string(dir.join("inventory.csv")).unwrap(),
        "1,Bolt,Hardware,Acme,5,0.1\n"
    );
    assert!(dir.join("config.json").exists());
}

#[test]
fn menu_exit_without_saving_keeps_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "Bolt", 5);

    stockroom(dir)
        .arg("menu")
        .write_stdin("4\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed item 1"));

    assert_eq!(
        fs::read_to_string(dir.join("inventory.csv")).unwrap(),
        "1,Bolt,Hardware,,5,0.25\n"
    );
}
