#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Days, Local, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: [&str; 4] = ["--user", "boss@example.com", "--role", "admin"];
pub const ANA: [&str; 2] = ["--user", "ana@example.com"];
pub const LUIS: [&str; 2] = ["--user", "luis@example.com"];

/// The binary, with its config dir moved into the temp dir so a real
/// ~/.barberbook is never read.
pub fn bb() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("barberbook_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("barberbook");
    cmd.env("BARBERBOOK_HOME", home).env_remove("BARBERBOOK_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_barberbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn days_from_today(n: u64) -> String {
    let d: NaiveDate = Local::now().date_naive() + Days::new(n);
    d.format("%Y-%m-%d").to_string()
}

pub fn days_before_today(n: u64) -> String {
    let d: NaiveDate = Local::now().date_naive() - Days::new(n);
    d.format("%Y-%m-%d").to_string()
}

/// Run `args` against `db` as the given identity.
pub fn run_as(db: &str, who: &[&str], args: &[&str]) -> assert_cmd::assert::Assert {
    bb().args(["--db", db]).args(who).args(args).assert()
}

/// Init the DB, open every day 09:00-12:00 with a 10:00-10:30 break,
/// add service #1 "Corte" and professionals #1 "Pablo" and #2 "Luis".
///
/// Every date then has the slots 09:00 09:30 10:30 11:00 11:30.
pub fn init_shop(db: &str) {
    bb().args(["--db", db, "--test", "init"]).assert().success();

    for day in ["0", "1", "2", "3", "4", "5", "6"] {
        run_as(
            db,
            &ADMIN,
            &[
                "hours", "--day", day, "--opened", "--open", "09:00", "--close", "12:00",
                "--break", "10:00-10:30",
            ],
        )
        .success();
    }

    run_as(
        db,
        &ADMIN,
        &["service", "add", "Corte", "--price", "5000", "--duration", "30"],
    )
    .success();
    run_as(db, &ADMIN, &["pro", "add", "Pablo", "--specialty", "Fades"]).success();
    run_as(db, &ADMIN, &["pro", "add", "Luis"]).success();
}
