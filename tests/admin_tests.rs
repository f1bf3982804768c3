use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ADMIN, ANA, days_from_today, init_shop, run_as, setup_test_db};

fn book(db: &str, date: &str, time: &str) {
    run_as(
        db,
        &ANA,
        &["book", date, time, "--service", "1", "--pro", "1", "--name", "Ana"],
    )
    .success();
}

#[test]
fn test_dashboard_counts() {
    let db_path = setup_test_db("dashboard_counts");
    init_shop(&db_path);
    book(&db_path, &days_from_today(1), "09:00");
    book(&db_path, &days_from_today(1), "09:30");

    run_as(&db_path, &ADMIN, &["dashboard", "--json"])
        .success()
        .stdout(contains("\"active\": 2"))
        .stdout(contains("\"completed\": 0"))
        .stdout(contains("\"active_services\": 1"))
        .stdout(contains("\"active_professionals\": 2"));

    run_as(&db_path, &ADMIN, &["status", "2", "completed"])
        .success()
        .stdout(contains("is now Completed"));

    run_as(&db_path, &ADMIN, &["dashboard", "--json"])
        .success()
        .stdout(contains("\"active\": 1"))
        .stdout(contains("\"completed\": 1"));

    run_as(&db_path, &ANA, &["dashboard"])
        .failure()
        .stderr(contains("Admin role required"));
}

#[test]
fn test_final_status_is_read_only() {
    let db_path = setup_test_db("final_status");
    init_shop(&db_path);
    book(&db_path, &days_from_today(2), "11:30");

    run_as(&db_path, &ADMIN, &["status", "1", "completed"]).success();

    run_as(&db_path, &ANA, &["cancel", "1"])
        .failure()
        .stderr(contains("cannot move from completed to cancelled"));

    run_as(&db_path, &ADMIN, &["status", "1", "pending"])
        .failure()
        .stderr(contains("cannot move"));

    run_as(&db_path, &ADMIN, &["status", "1", "paused"])
        .failure()
        .stderr(contains("Invalid appointment status"));
}

#[test]
fn test_payment_and_clients() {
    let db_path = setup_test_db("payment_clients");
    init_shop(&db_path);
    book(&db_path, &days_from_today(2), "09:00");

    run_as(&db_path, &ADMIN, &["pay", "1"])
        .success()
        .stdout(contains("payment: Paid"));

    run_as(&db_path, &ADMIN, &["clients", "--search", "ana"])
        .success()
        .stdout(contains("ana@example.com"))
        .stdout(contains("$5.000"));

    run_as(&db_path, &ADMIN, &["clients", "--search", "nobody"])
        .success()
        .stdout(contains("No clients found"));

    run_as(&db_path, &ADMIN, &["appointments", "--status", "confirmed", "--json"])
        .success()
        .stdout(contains("\"payment_status\": \"paid\""))
        .stdout(contains("\"client_email\": \"ana@example.com\""));

    run_as(&db_path, &ADMIN, &["log", "--print"])
        .success()
        .stdout(contains("book"))
        .stdout(contains("payment"));
}

#[test]
fn test_customer_only_sees_own_appointments() {
    let db_path = setup_test_db("own_appointments");
    init_shop(&db_path);
    book(&db_path, &days_from_today(2), "09:00");

    run_as(
        &db_path,
        &["--user", "luis@example.com"],
        &["book", &days_from_today(2), "09:30", "--service", "1", "--pro", "1"],
    )
    .failure()
    .stderr(contains("Missing required field: name"));

    run_as(&db_path, &["--user", "luis@example.com"], &["appointments"])
        .success()
        .stdout(contains("Upcoming (0)"))
        .stdout(contains("ana@example.com").not());

    run_as(&db_path, &ANA, &["appointments", "--json"])
        .success()
        .stdout(contains("ana@example.com"));
}
