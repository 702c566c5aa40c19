use predicates::str::contains;

mod common;
use common::{et, init_week, setup_conf_dir};

use efforttrack::core::{datekey, daterange};
use efforttrack::models::RangeMode;

#[test]
fn test_init_creates_config_and_workspace() {
    let dir = setup_conf_dir("init");

    et().args(["--conf", &dir, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"))
        .stdout(contains("Workspace file:"))
        .stdout(contains("initialization completed"));
}

#[test]
fn test_config_show_defaults() {
    let dir = setup_conf_dir("config_defaults");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args(["--conf", &dir, "config", "--show"])
        .assert()
        .success()
        .stdout(contains("http://localhost:8080"))
        .stdout(contains("(not set)"));
}

#[test]
fn test_config_set_email_and_url() {
    let dir = setup_conf_dir("config_set");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args([
        "--conf",
        &dir,
        "config",
        "--url",
        "https://timesheet.example.com/",
        "--email",
        "dev@example.com",
    ])
    .assert()
    .success()
    .stdout(contains("Configuration updated"));

    et().args(["--conf", &dir, "config", "--show"])
        .assert()
        .success()
        .stdout(contains("https://timesheet.example.com"))
        .stdout(contains("dev@example.com"));
}

#[test]
fn test_status_fresh_workspace() {
    let dir = setup_conf_dir("status_fresh");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args(["--conf", &dir, "status"])
        .assert()
        .success()
        .stdout(contains("not logged in"))
        .stdout(contains("weekly"))
        .stdout(contains("Rows    : 1"))
        .stdout(contains("Workspace in sync"));
}

#[test]
fn test_mode_weekly_pins_monday_to_sunday() {
    let dir = setup_conf_dir("mode_weekly");

    et().args(["--conf", &dir, "init"]).assert().success();

    // 2025-09-10 is a Wednesday
    et().args([
        "--conf",
        &dir,
        "mode",
        "--set",
        "weekly",
        "--date",
        "2025-09-10",
    ])
    .assert()
    .success()
    .stdout(contains("Switched to weekly range: 2025-09-08 to 2025-09-14"));
}

#[test]
fn test_mode_daily_is_a_single_day() {
    let dir = setup_conf_dir("mode_daily");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args([
        "--conf",
        &dir,
        "mode",
        "--set",
        "daily",
        "--date",
        "2025-09-10",
    ])
    .assert()
    .success()
    .stdout(contains("Switched to daily range: 2025-09-10 to 2025-09-10"));
}

#[test]
fn test_mode_rejects_malformed_dates() {
    let dir = setup_conf_dir("mode_bad_date");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args([
        "--conf",
        &dir,
        "mode",
        "--set",
        "weekly",
        "--date",
        "10/09/2025",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_week_requires_weekly_mode() {
    let dir = setup_conf_dir("week_needs_weekly");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args([
        "--conf",
        &dir,
        "mode",
        "--set",
        "daily",
        "--date",
        "2025-09-10",
    ])
    .assert()
    .success();

    et().args(["--conf", &dir, "week", "--prev"])
        .assert()
        .failure()
        .stderr(contains("Week navigation requires weekly mode"));
}

#[test]
fn test_week_without_direction_is_an_error() {
    let dir = setup_conf_dir("week_no_flags");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args(["--conf", &dir, "week"])
        .assert()
        .failure()
        .stderr(contains("pass --prev or --next"));
}

#[test]
fn test_week_prev_moves_one_week_back() {
    let dir = setup_conf_dir("week_prev");

    // init anchors the weekly range to today
    et().args(["--conf", &dir, "init"]).assert().success();

    let today = daterange::today();
    let range = daterange::compute(RangeMode::Weekly, today);
    let prev = daterange::prev_week(&range, today).expect("current week always has a predecessor");

    et().args(["--conf", &dir, "week", "--prev"])
        .assert()
        .success()
        .stdout(contains(format!(
            "Week set to {} to {}",
            datekey::to_iso(prev.start),
            datekey::to_iso(prev.end)
        )));
}

#[test]
fn test_week_next_respects_the_month_ceiling() {
    let dir = setup_conf_dir("week_next");

    et().args(["--conf", &dir, "init"]).assert().success();

    let today = daterange::today();
    let range = daterange::compute(RangeMode::Weekly, today);

    match daterange::next_week(&range, today) {
        Ok(next) => {
            et().args(["--conf", &dir, "week", "--next"])
                .assert()
                .success()
                .stdout(contains(format!(
                    "Week set to {} to {}",
                    datekey::to_iso(next.start),
                    datekey::to_iso(next.end)
                )));
        }
        Err(_) => {
            et().args(["--conf", &dir, "week", "--next"])
                .assert()
                .failure()
                .stderr(contains("Already at the last week of the month"));
        }
    }
}

#[test]
fn test_show_columns_lists_weekday_labels() {
    let dir = setup_conf_dir("show_columns");
    init_week(&dir);

    et().args(["--conf", &dir, "show", "--columns"])
        .assert()
        .success()
        .stdout(contains("8 Sep (Mon)"))
        .stdout(contains("12 Sep (Fri)"));
}

#[test]
fn test_show_columns_monthly_flags_weekends() {
    let dir = setup_conf_dir("show_columns_monthly");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args([
        "--conf",
        &dir,
        "mode",
        "--set",
        "monthly",
        "--date",
        "2025-09-10",
    ])
    .assert()
    .success();

    et().args(["--conf", &dir, "show", "--columns"])
        .assert()
        .success()
        .stdout(contains("6 Sep (Sat) [weekend]"))
        .stdout(contains("7 Sep (Sun) [weekend]"));
}

#[test]
fn test_logout_without_a_session() {
    let dir = setup_conf_dir("logout_none");

    et().args(["--conf", &dir, "init"]).assert().success();

    et().args(["--conf", &dir, "logout"])
        .assert()
        .success()
        .stdout(contains("No stored session"));
}

#[test]
fn test_load_requires_a_session() {
    let dir = setup_conf_dir("load_no_session");
    init_week(&dir);

    et().args(["--conf", &dir, "load"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_options_require_a_session() {
    let dir = setup_conf_dir("options_no_session");
    init_week(&dir);

    et().args(["--conf", &dir, "options", "--row", "1"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}
