use predicates::str::contains;

mod common;
use common::{calc_electricity, cbl, history_rows, init_db, list_output, row_id, setup_test_db};

#[test]
fn test_list_empty_history() {
    let name = "list_empty";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("No calculations yet"));
}

#[test]
fn test_list_keeps_five_newest() {
    let name = "list_five_newest";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    for kwh in ["1", "2", "3", "4", "5", "6", "7"] {
        calc_electricity(name, &db_path, "alice", kwh);
    }

    let rows = history_rows(&list_output(name, &db_path, "alice"));
    assert_eq!(rows.len(), 5);

    // newest first: 7 kWh → 3.50 kg, ..., 3 kWh → 1.50 kg
    let expected = ["3.50", "3.00", "2.50", "2.00", "1.50"];
    for (row, kg) in rows.iter().zip(expected) {
        assert!(row.contains(kg), "row {row:?} should contain {kg}");
    }
}

#[test]
fn test_list_is_scoped_to_user() {
    let name = "list_scoped";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "alice", "100");
    calc_electricity(name, &db_path, "bob", "300");

    let alice = history_rows(&list_output(name, &db_path, "alice"));
    let bob = history_rows(&list_output(name, &db_path, "bob"));
    assert_eq!(alice.len(), 1);
    assert_eq!(bob.len(), 1);
    assert!(alice[0].contains("50.00"));
    assert!(bob[0].contains("150.00"));

    let nobody = list_output(name, &db_path, "dave");
    assert!(nobody.contains("No calculations yet"));
}

#[test]
fn test_del_by_id() {
    let name = "del_by_id";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "alice", "10");
    calc_electricity(name, &db_path, "alice", "20");

    let rows = history_rows(&list_output(name, &db_path, "alice"));
    let victim = row_id(&rows[0]);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", &victim, "--yes"])
        .assert()
        .success()
        .stdout(contains("Calculation removed successfully."));

    let after = list_output(name, &db_path, "alice");
    assert!(!after.contains(&victim));
    assert_eq!(history_rows(&after).len(), 1);
}

#[test]
fn test_del_by_position() {
    let name = "del_by_pos";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "alice", "10");
    calc_electricity(name, &db_path, "alice", "20");
    let second = row_id(&history_rows(&list_output(name, &db_path, "alice"))[1]);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", "--pos", "2", "--yes"])
        .assert()
        .success();

    let after = list_output(name, &db_path, "alice");
    assert!(!after.contains(&second));
    // the newer one (20 kWh → 10.00 kg) is still there
    assert!(history_rows(&after)[0].contains("10.00"));
}

#[test]
fn test_del_writes_audit_log_entry() {
    let name = "del_audit_log";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "alice", "10");
    let id = row_id(&history_rows(&list_output(name, &db_path, "alice"))[0]);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", "--pos", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Calculation removed successfully."));

    cbl(name)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains(format!("Deleted calculation {}", id)));
}

#[test]
fn test_del_other_users_record_fails() {
    let name = "del_foreign";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "bob", "10");
    let bobs = row_id(&history_rows(&list_output(name, &db_path, "bob"))[0]);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", &bobs, "--yes"])
        .assert()
        .failure()
        .stderr(contains("Failed to delete calculation."));

    assert_eq!(history_rows(&list_output(name, &db_path, "bob")).len(), 1);
}

#[test]
fn test_del_invalid_id() {
    let name = "del_invalid_id";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", "not-an-id", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid calculation id"));
}

#[test]
fn test_del_cancelled_keeps_record() {
    let name = "del_cancelled";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    calc_electricity(name, &db_path, "alice", "10");

    cbl(name)
        .args(["--db", &db_path, "--user", "alice", "del", "--pos", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(history_rows(&list_output(name, &db_path, "alice")).len(), 1);
}
