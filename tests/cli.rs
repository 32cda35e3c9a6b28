use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_init_creates_data_and_config() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!").and(contains("Default categories")));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());
}

#[test]
fn cli_add_then_list() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "lön", "20000", "--income", "--category", "salary"])
        .assert()
        .success()
        .stdout(contains("Added to list!").and(contains("Remaining: 20000.00 SEK")));

    budget(&dir)
        .args(["add", "hyra", "8000", "--expense", "-c", "rent"])
        .assert()
        .success()
        .stdout(contains("Remaining: 12000.00 SEK"));

    budget(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Lön")
                .and(contains("20000.00 SEK"))
                .and(contains("Hyra"))
                .and(contains("8000.00 SEK")),
        );

    budget(&dir)
        .args(["list", "--category", "rent"])
        .assert()
        .success()
        .stdout(contains("Hyra").and(contains("Lön").not()));

    assert!(dir.path().join("data").join("ledger.json").exists());
}

#[test]
fn cli_add_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Mat", "12.999", "--expense"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn cli_add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Mat", "100", "--expense", "--category", "nope"])
        .assert()
        .failure()
        .stderr(contains("Category not found: nope"));
}

#[test]
fn cli_add_requires_exactly_one_type() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Mat", "100"])
        .assert()
        .failure();

    budget(&dir)
        .args(["add", "Mat", "100", "--income", "--expense"])
        .assert()
        .failure();
}

#[test]
fn cli_add_reports_stripped_description() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "Mat 2", "50", "--expense"])
        .assert()
        .success()
        .stdout(contains("description stored as 'Mat '"));
}

#[test]
fn cli_remove_by_row() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "lön", "20000", "--income"])
        .assert()
        .success();
    budget(&dir)
        .args(["add", "hyra", "8000", "--expense"])
        .assert()
        .success();

    budget(&dir)
        .args(["remove", "1", "--expense"])
        .assert()
        .success()
        .stdout(contains("Removed expense").and(contains("Remaining: 20000.00 SEK")));

    budget(&dir)
        .args(["remove", "1", "--expense"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn cli_summary_shows_totals() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["add", "hyra", "8000", "--expense"])
        .assert()
        .success();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Budget for").and(contains("-8000.00 SEK")));
}

#[test]
fn cli_category_lifecycle() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["category", "add", "pets", "Husdjur", "--expense"])
        .assert()
        .success()
        .stdout(contains("Added expense category: Husdjur"));

    budget(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("pets").and(contains("Husdjur")));

    budget(&dir)
        .args(["category", "add", "pets", "Igen", "--expense"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    budget(&dir)
        .args(["category", "remove", "pets"])
        .assert()
        .success()
        .stdout(contains("Removed category: Husdjur"));

    budget(&dir)
        .args(["category", "reset"])
        .assert()
        .success()
        .stdout(contains("Restored 10 default categories."));
}

#[test]
fn cli_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency suffix:   SEK").and(contains("Data directory")));
}
