use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ADMIN, ANA, bb, init_shop, run_as, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    bb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    bb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn test_config_print_shows_defaults() {
    bb().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("slot_interval_minutes: 30"))
        .stdout(contains("booking_horizon_days: 30"));
}

#[test]
fn test_hours_default_week_until_saved() {
    let db_path = setup_test_db("hours_default_week");
    bb().args(["--db", &db_path, "--test", "init"]).assert().success();

    bb().args(["--db", &db_path, "hours"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Sunday"))
        .stdout(contains("closed"))
        .stdout(contains("not stored yet"));
}

#[test]
fn test_hours_update_and_reset() {
    let db_path = setup_test_db("hours_update_reset");
    bb().args(["--db", &db_path, "--test", "init"]).assert().success();

    run_as(
        &db_path,
        &ADMIN,
        &["hours", "--day", "monday", "--open", "10:00", "--break", "13:00-14:00"],
    )
    .success()
    .stdout(contains("10:00-20:00 (break 13:00-14:00)"));

    run_as(&db_path, &ADMIN, &["hours", "--day", "1", "--no-break"])
        .success()
        .stdout(contains("13:00-14:00").not());

    run_as(&db_path, &ADMIN, &["hours", "--reset"])
        .success()
        .stdout(contains("10:00").not());

    run_as(&db_path, &ADMIN, &["log", "--print"])
        .success()
        .stdout(contains("hours"));
}

#[test]
fn test_hours_rejects_invalid_values() {
    let db_path = setup_test_db("hours_invalid");
    bb().args(["--db", &db_path, "--test", "init"]).assert().success();

    run_as(&db_path, &ADMIN, &["hours", "--day", "1", "--open", "21:00"])
        .failure()
        .stderr(contains("open time must be before close time"));

    run_as(&db_path, &ADMIN, &["hours", "--day", "funday", "--closed"])
        .failure()
        .stderr(contains("Invalid day of week"));

    run_as(&db_path, &ADMIN, &["hours", "--day", "1", "--open", "9:00"])
        .failure()
        .stderr(contains("Invalid time format"));

    run_as(&db_path, &ADMIN, &["hours", "--day", "1", "--break", "14:00-13:00"])
        .failure()
        .stderr(contains("break end must be after break start"));
}

#[test]
fn test_hours_change_requires_admin() {
    let db_path = setup_test_db("hours_requires_admin");
    bb().args(["--db", &db_path, "--test", "init"]).assert().success();

    run_as(&db_path, &ANA, &["hours", "--day", "1", "--closed"])
        .failure()
        .stderr(contains("Admin role required"));

    bb().args(["--db", &db_path, "hours", "--day", "1", "--closed"])
        .assert()
        .failure()
        .stderr(contains("Login required"));
}

#[test]
fn test_catalog_admin_and_customer_views() {
    let db_path = setup_test_db("catalog_views");
    init_shop(&db_path);

    run_as(&db_path, &ANA, &["service", "add", "Barba"])
        .failure()
        .stderr(contains("Admin role required"));

    run_as(
        &db_path,
        &ADMIN,
        &["service", "add", "Tinte", "--category", "color", "--price", "12500"],
    )
    .success();
    run_as(&db_path, &ADMIN, &["service", "edit", "2", "--active", "false"]).success();

    run_as(&db_path, &ANA, &["service", "list", "--all"])
        .success()
        .stdout(contains("Corte"))
        .stdout(contains("Tinte").not());

    run_as(&db_path, &ADMIN, &["service", "list", "--all"])
        .success()
        .stdout(contains("Tinte"))
        .stdout(contains("$12.500"));

    run_as(&db_path, &ADMIN, &["service", "add", "Mechas", "--category", "neon"])
        .failure()
        .stderr(contains("Invalid service category"));

    run_as(&db_path, &ADMIN, &["pro", "edit", "2", "--specialty", "Beards"])
        .success()
        .stdout(contains("Beards"));

    run_as(&db_path, &ADMIN, &["pro", "del", "2", "--force"])
        .success()
        .stdout(contains("deleted"));

    run_as(&db_path, &ADMIN, &["pro", "del", "2", "--force"])
        .failure()
        .stderr(contains("not found"));

    run_as(&db_path, &ANA, &["pro", "list"])
        .success()
        .stdout(contains("Pablo"))
        .stdout(contains("Luis").not());
}
