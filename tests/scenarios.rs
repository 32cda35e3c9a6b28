use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use budget_tracker::app::BudgetApp;
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::models::EntryType;
use budget_tracker::services::BalanceTone;
use budget_tracker::storage::{KeyValueStore, Storage};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer the test subscriber writes log lines into
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with warnings captured, returning the value and the log text
fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (value, logs)
}

fn fill(app: &mut BudgetApp, description: &str, amount: &str, entry_type: EntryType) {
    app.input_description(description);
    app.input_amount(amount);
    app.select_type(entry_type, true);
}

#[test]
fn income_then_expense_then_removal() {
    let mut app = BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap();

    // Add an income
    app.select_category("salary");
    fill(&mut app, "lön", "20000", EntryType::Income);
    app.submit().unwrap();

    assert_eq!(app.ledger().len(), 1);
    let view = app.render(Instant::now());
    assert_eq!(view.remaining_text, "20000.00");
    assert_eq!(view.tone, BalanceTone::Positive);

    // Add an expense
    app.select_category("rent");
    fill(&mut app, "hyra", "8000", EntryType::Expense);
    let expense = app.submit().unwrap();
    assert_eq!(app.render(Instant::now()).remaining_text, "12000.00");

    // Remove it again
    app.remove(expense.id).unwrap();
    app.select_category("all");
    let view = app.render(Instant::now());
    assert_eq!(view.remaining_text, "20000.00");
    assert!(view.expense_lines.is_empty());
    assert_eq!(view.income_lines.len(), 1);
}

#[test]
fn three_decimal_amount_hides_submit() {
    let mut app = BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap();
    fill(&mut app, "Mat", "12.999", EntryType::Expense);

    let report = app.validation();
    assert!(!report.amount_valid);
    assert!(report.amount_error_visible);
    assert!(!report.submit_visible);
    assert!(app.submit().is_err());
}

#[test]
fn description_digits_are_stripped() {
    let mut app = BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap();

    assert_eq!(app.input_description("Mat 2"), "Mat ");
    assert!(app.validation().description_valid);
}

#[test]
fn fresh_start_is_empty() {
    let (app, logs) =
        capture_warnings(|| BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("No saved budget data found"));

    let view = app.render(Instant::now());

    assert!(view.income_lines.is_empty());
    assert!(view.expense_lines.is_empty());
    assert_eq!(view.remaining_text, "0.00");
    assert_eq!(view.tone, BalanceTone::Positive);
    assert_eq!(view.filter_options.iter().filter(|o| o.value == "all").count(), 1);
}

#[test]
fn items_survive_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let paths = BudgetPaths::with_base_dir(dir.path().to_path_buf());

    {
        let storage = Storage::open(&paths).unwrap();
        let mut app = BudgetApp::start(storage, Settings::default()).unwrap();
        app.select_category("food");
        fill(&mut app, "Mat", "249.50", EntryType::Expense);
        app.submit().unwrap();
    }

    let storage = Storage::open(&paths).unwrap();
    let app = BudgetApp::start(storage, Settings::default()).unwrap();
    let view = app.render(Instant::now());
    assert_eq!(view.expense_lines.len(), 1);
    assert_eq!(view.expense_lines[0].text, "Mat: 249.50 SEK");
    assert_eq!(app.ledger().items()[0].category, "food");
}

#[test]
fn corrupt_ledger_on_disk_starts_empty() {
    let dir = TempDir::new().unwrap();
    let paths = BudgetPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure_directories().unwrap();
    std::fs::write(paths.data_dir().join("ledger.json"), "[{broken").unwrap();

    let storage = Storage::open(&paths).unwrap();
    let (app, logs) = capture_warnings(|| BudgetApp::start(storage, Settings::default()).unwrap());
    assert!(app.ledger().is_empty());
    assert!(logs.contains("Ignoring unreadable budget data"));
    assert!(!logs.contains("No saved budget data found"));
}

#[test]
fn corrupt_categories_fall_back_to_bundled() {
    let dir = TempDir::new().unwrap();
    let paths = BudgetPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure_directories().unwrap();
    std::fs::write(paths.data_dir().join("categories.json"), "not json").unwrap();

    let storage = Storage::open(&paths).unwrap();
    let (app, logs) = capture_warnings(|| BudgetApp::start(storage, Settings::default()).unwrap());
    assert!(app.categories().contains("rent"));
    assert!(app.categories().contains("salary"));
    assert!(logs.contains("could not parse stored categories, using defaults"));
}

#[test]
fn saved_data_starts_without_warnings() {
    let storage = Storage::in_memory();
    storage.ledger().save(&[]).unwrap();

    let (_app, logs) = capture_warnings(|| BudgetApp::start(storage, Settings::default()).unwrap());
    assert!(logs.is_empty(), "unexpected warnings: {}", logs);
}

#[test]
fn invalid_stored_amounts_are_dropped_with_a_warning() {
    let storage = Storage::in_memory();
    storage
        .store()
        .set(
            "ledger",
            r#"[{"description":"Minus","amount":-40,"category":"food","type":"expense"},
                {"description":"Mat","amount":40,"category":"food","type":"expense"}]"#,
        )
        .unwrap();

    let (app, logs) = capture_warnings(|| BudgetApp::start(storage, Settings::default()).unwrap());
    assert_eq!(app.ledger().len(), 1);
    assert_eq!(app.render(Instant::now()).remaining_text, "-40.00");
    assert!(logs.contains("dropping stored item with a non-positive amount"));
}

#[test]
fn legacy_ids_survive_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let paths = BudgetPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure_directories().unwrap();
    std::fs::write(
        paths.data_dir().join("ledger.json"),
        r#"[{"description":"Hyra","amount":8000,"category":"rent","type":"expense"}]"#,
    )
    .unwrap();

    let listed = {
        let app = BudgetApp::start(Storage::open(&paths).unwrap(), Settings::default()).unwrap();
        app.ledger().items()[0].id
    };

    let mut app = BudgetApp::start(Storage::open(&paths).unwrap(), Settings::default()).unwrap();
    app.remove(listed).unwrap();
    assert!(app.ledger().is_empty());
}

#[test]
fn removal_rows_follow_the_filtered_list() {
    let mut app = BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap();

    app.select_category("rent");
    fill(&mut app, "Hyra", "8000", EntryType::Expense);
    app.submit().unwrap();
    app.select_category("food");
    fill(&mut app, "Mat", "300", EntryType::Expense);
    app.submit().unwrap();

    // Row 0 of the food-filtered list is "Mat", not the first expense overall
    let removed = app.remove_at(EntryType::Expense, 0).unwrap();
    assert_eq!(removed.description, "Mat");
    assert_eq!(app.ledger().len(), 1);
    assert_eq!(app.ledger().items()[0].description, "Hyra");
}

#[test]
fn identical_items_are_removed_one_at_a_time() {
    let mut app = BudgetApp::start(Storage::in_memory(), Settings::default()).unwrap();
    for _ in 0..2 {
        fill(&mut app, "Mat", "100", EntryType::Expense);
        app.submit().unwrap();
    }

    let second = app.ledger().items()[1].id;
    app.remove(second).unwrap();

    assert_eq!(app.ledger().len(), 1);
    assert_ne!(app.ledger().items()[0].id, second);
}
