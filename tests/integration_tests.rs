use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cfy, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok(), "DB file should exist");
}

#[test]
fn test_command_without_init_fails() {
    let db_path = setup_test_db("no_init");

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}

#[test]
fn test_init_sample_seeds_three_connections() {
    let db_path = setup_test_db("init_sample");

    cfy()
        .args(["--db", &db_path, "--test", "init", "--sample"])
        .assert()
        .success()
        .stdout(contains("Added 3 sample connections"));

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Wormy"))
        .stdout(contains("Fank"))
        .stdout(contains("Eeham"))
        .stdout(contains("2024-08-02"));
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_list");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ann"))
        .stdout(contains("Bob"))
        .stdout(contains("Quarterly"))
        .stdout(contains("overdue"));
}

#[test]
fn test_add_prints_scheduled_date() {
    let db_path = setup_test_db("add_message");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "add", "Cleo", "--id", "cleo"])
        .assert()
        .success()
        .stdout(contains("Successfully added contact cleo for user me with CheckInDate"));
}

#[test]
fn test_add_duplicate_is_rejected() {
    let db_path = setup_test_db("add_duplicate");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "add", "Ann again", "--id", "ann"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_add_invalid_frequency() {
    let db_path = setup_test_db("add_bad_freq");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "add", "Dan", "--freq", "Weekly"])
        .assert()
        .failure()
        .stderr(contains("invalid CheckInFrequency: Weekly"));
}

#[test]
fn test_add_invalid_date() {
    let db_path = setup_test_db("add_bad_date");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "add", "Eve", "--birthday", "31/12/1990"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_show_json() {
    let db_path = setup_test_db("show_json");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "show", "ann", "--json"])
        .assert()
        .success()
        .stdout(contains("\"contactId\": \"ann\""))
        .stdout(contains("\"checkInFrequency\": \"Monthly\""))
        .stdout(contains("\"lastCheckIn\": \"2024-01-10\""))
        .stdout(contains("\"birthday\": \"1990-04-02\""));
}

#[test]
fn test_show_unknown_contact() {
    let db_path = setup_test_db("show_unknown");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "show", "zed"])
        .assert()
        .failure()
        .stderr(contains(
            "no contact found with UserId='me' and ContactId='zed'",
        ));
}

#[test]
fn test_user_override_isolates_connections() {
    let db_path = setup_test_db("user_override");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "-u", "alice", "add", "Zoe", "--id", "zoe"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "-u", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("Zoe"))
        .stdout(contains("Ann").not());

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Zoe").not());
}

#[test]
fn test_edit_updates_fields() {
    let db_path = setup_test_db("edit_fields");
    init_db_with_data(&db_path);

    cfy()
        .args([
            "--db",
            &db_path,
            "edit",
            "bob",
            "--name",
            "Robert",
            "--freq",
            "twice-a-month",
        ])
        .assert()
        .success()
        .stdout(contains("Updated attributes"))
        .stdout(contains("CheckInFrequency=Twice a Month"))
        .stdout(contains("Name=Robert"));

    cfy()
        .args(["--db", &db_path, "show", "bob", "--json"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"Robert\""))
        .stdout(contains("\"checkInFrequency\": \"Twice a Month\""));
}

#[test]
fn test_edit_without_fields_fails() {
    let db_path = setup_test_db("edit_nothing");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "edit", "bob"])
        .assert()
        .failure()
        .stderr(contains("no fields provided to update"));
}

#[test]
fn test_edit_unknown_contact_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "edit", "zed", "--name", "Zed"])
        .assert()
        .failure()
        .stderr(contains("no contact found"));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "del", "bob"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Successfully deleted contact bob"));

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bob").not());
}

#[test]
fn test_del_cancelled() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "del", "bob"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    cfy()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bob"));
}

#[test]
fn test_del_missing_contact_is_not_an_error() {
    let db_path = setup_test_db("del_missing");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "del", "zed", "--yes"])
        .assert()
        .success()
        .stdout(contains("Nothing to delete"));
}

#[test]
fn test_checkins_due_lists_only_overdue() {
    let db_path = setup_test_db("checkins_due");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "checkins", "--due"])
        .assert()
        .success()
        .stdout(contains("Due Check-Ins"))
        .stdout(contains("Ann"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_checkins_mark_records_check_in() {
    let db_path = setup_test_db("checkins_mark");
    init_db_with_data(&db_path);

    // Ann is overdue, so she is the first row
    cfy()
        .args(["--db", &db_path, "checkins", "--mark", "1"])
        .assert()
        .success()
        .stdout(contains("[x]"))
        .stdout(contains("Checked in with Ann"));

    cfy()
        .args(["--db", &db_path, "checkins", "--due"])
        .assert()
        .success()
        .stdout(contains("No check-ins due today"));
}

#[test]
fn test_checkins_mark_out_of_range() {
    let db_path = setup_test_db("checkins_range");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "checkins", "--mark", "7"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn test_checkin_all_due() {
    let db_path = setup_test_db("checkin_all_due");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "checkin", "--all-due"])
        .assert()
        .success()
        .stdout(contains("Checked in with Ann"))
        .stdout(contains("Checked in with Bob").not());

    cfy()
        .args(["--db", &db_path, "home"])
        .assert()
        .success()
        .stdout(contains("No check-ins due today"));
}

#[test]
fn test_checkin_unknown_contact_changes_nothing() {
    let db_path = setup_test_db("checkin_unknown");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "checkin", "ann", "zed"])
        .assert()
        .failure()
        .stderr(contains("no contact found"));

    // the failed batch must not have touched ann
    cfy()
        .args(["--db", &db_path, "show", "ann", "--json"])
        .assert()
        .success()
        .stdout(contains("\"lastCheckIn\": \"2024-01-10\""));
}

#[test]
fn test_home_shows_due_connections() {
    let db_path = setup_test_db("home_due");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "home"])
        .assert()
        .success()
        .stdout(contains("Today's Check Ins"))
        .stdout(contains("Ann"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_both");
    init_db_with_data(&db_path);

    let csv_out = temp_out("export_both", "csv");
    cfy()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&csv_out).expect("read csv");
    assert!(csv.starts_with("userId,contactId,name,birthday,checkInFrequency"));
    assert!(csv.contains("me,ann,Ann,1990-04-02,Monthly"));

    let json_out = temp_out("export_both", "json");
    cfy()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json"))
            .expect("valid json");
    assert_eq!(json.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip_path = temp_out("backup_zip", "zip");

    cfy()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&zip_path).is_ok(), "zip archive should exist");
    assert!(fs::metadata(&out).is_err(), "plain copy should not remain");
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "del", "bob", "--yes"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("me/bob"))
        .stdout(contains("Connection deleted"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_config_check_and_migrate() {
    let mut home = std::env::temp_dir();
    home.push("connectify_config_migrate_home");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create home");

    let conf = home.join("connectify.conf");
    fs::write(&conf, "database: /tmp/old.sqlite\n").expect("write old config");

    cfy()
        .env("CONNECTIFY_HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("default_user"));

    cfy()
        .env("CONNECTIFY_HOME", &home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Config migration applied"));

    let content = fs::read_to_string(&conf).expect("read migrated config");
    assert!(content.contains("database: /tmp/old.sqlite"));
    assert!(content.contains("default_frequency: Monthly"));
    assert!(content.contains("# default_frequency options:"));

    cfy()
        .env("CONNECTIFY_HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_user: me"))
        .stdout(contains("birthday_window_days: 14"));
}

#[test]
fn test_relative_db_path_is_shared_by_all_commands() {
    let mut work = std::env::temp_dir();
    work.push("connectify_relative_db_work");
    fs::remove_dir_all(&work).ok();
    fs::create_dir_all(&work).expect("create work dir");

    cfy()
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();

    assert!(work.join("rel.sqlite").exists(), "DB should live in the working dir");

    cfy()
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "add", "Ann", "--id", "ann"])
        .assert()
        .success();

    cfy()
        .current_dir(&work)
        .args(["--db", "rel.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("Ann"));
}

#[test]
fn test_export_existing_file_declined() {
    let db_path = setup_test_db("export_declined");
    init_db_with_data(&db_path);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").expect("write existing file");

    cfy()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_existing_file_confirmed() {
    let db_path = setup_test_db("export_confirmed");
    init_db_with_data(&db_path);

    let out = temp_out("export_confirmed", "csv");
    fs::write(&out, "old").expect("write existing file");

    cfy()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    assert!(fs::read_to_string(&out).expect("read").contains("me,ann,Ann"));
}

#[test]
fn test_export_force_overwrites_without_prompt() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "json");
    fs::write(&out, "old").expect("write existing file");

    cfy()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Overwrite?").not());

    assert!(fs::read_to_string(&out).expect("read").contains("\"contactId\": \"bob\""));
}

#[test]
fn test_export_empty_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");
    cfy()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No connections found to export"));

    assert!(fs::metadata(&out).is_err(), "no file should be written");
}

#[test]
fn test_export_all_users_scope() {
    let db_path = setup_test_db("export_all_users");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "-u", "alice", "add", "Zoe", "--id", "zoe"])
        .assert()
        .success();

    let mine = temp_out("export_scope_mine", "json");
    cfy()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &mine])
        .assert()
        .success();

    let everyone = temp_out("export_scope_all", "json");
    cfy()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &everyone,
            "--all-users",
        ])
        .assert()
        .success();

    let count = |path: &str| {
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).expect("read json"))
                .expect("valid json");
        json.as_array().map(|a| a.len()).unwrap_or(0)
    };

    assert_eq!(count(&mine), 2);
    assert_eq!(count(&everyone), 3);
    assert!(!fs::read_to_string(&mine).expect("read").contains("zoe"));
}

#[test]
fn test_backup_plain_copy_and_overwrite_prompt() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    cfy()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let copy = fs::metadata(&out).expect("backup copy should exist");
    assert!(copy.len() > 0);

    cfy()
        .args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Backup cancelled"));

    cfy()
        .args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Backup created"));
}

#[test]
fn test_checkin_repeated_id_counts_once() {
    let db_path = setup_test_db("checkin_repeated");
    init_db_with_data(&db_path);

    cfy()
        .args(["--db", &db_path, "checkin", "ann", "ann"])
        .assert()
        .success();

    let output = cfy()
        .args(["--db", &db_path, "log", "--print"])
        .output()
        .expect("run log --print");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout.matches("Checked in with 'Ann'").count(), 1);
}

#[test]
fn test_checkins_mark_rejected_on_empty_sheet() {
    let db_path = setup_test_db("checkins_empty_mark");

    cfy()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cfy()
        .args(["--db", &db_path, "checkins", "--due", "--mark", "5"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}
