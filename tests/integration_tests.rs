use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_store_with_groups, rt, setup_test_store, temp_out};

#[test]
fn test_init_creates_store_document() {
    let store_path = setup_test_store("init");

    rt().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store:"));

    assert!(std::path::Path::new(&store_path).exists());
}

#[test]
fn test_add_and_list_groups() {
    let store_path = setup_test_store("add_list");
    rt().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "add", "Dishes"])
        .assert()
        .success()
        .stdout(contains("Created group 'Dishes' (id 1)"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Tally Marks"))
        .stdout(contains("Dishes"))
        .stdout(contains("[0]"));
}

#[test]
fn test_add_trims_label() {
    let store_path = setup_test_store("add_trim");
    rt().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "add", "  Chores  "])
        .assert()
        .success()
        .stdout(contains("Created group 'Chores'"));
}

#[test]
fn test_add_empty_label_is_a_noop() {
    let store_path = setup_test_store("add_empty");
    rt().args(["--store", &store_path, "--test", "init"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "add", "   "])
        .assert()
        .success()
        .stdout(contains("Label is empty"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("No tally groups yet"));
}

#[test]
fn test_tally_increments_and_renders_scoped() {
    let store_path = setup_test_store("tally_six");
    init_store_with_groups(&store_path);

    for _ in 0..6 {
        rt().args(["--store", &store_path, "tally", "1"])
            .assert()
            .success()
            .stdout(contains("Dishes"));
    }

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("[6]"))
        .stdout(contains("/")) // one closed bundle
        .stdout(contains("|")); // plus a plain remainder mark
}

#[test]
fn test_tally_unknown_id_is_reported_not_fatal() {
    let store_path = setup_test_store("tally_missing");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "tally", "42"])
        .assert()
        .success()
        .stdout(contains("No group with id 42"));
}

#[test]
fn test_reset_clears_one_group_only() {
    let store_path = setup_test_store("reset_one");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "tally", "1"])
        .assert()
        .success();
    rt().args(["--store", &store_path, "tally", "2"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "reset", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Reset group 'Dishes'"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("[0]"))
        .stdout(contains("[1]"));
}

#[test]
fn test_reset_aborts_without_confirmation() {
    let store_path = setup_test_store("reset_abort");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "tally", "1"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "reset", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Aborted"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("[1]"));
}

#[test]
fn test_del_removes_group_and_keeps_the_rest() {
    let store_path = setup_test_store("del_first");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted group 'Dishes'"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Laundry"))
        .stdout(contains("Dishes").not());
}

#[test]
fn test_rename_with_argument() {
    let store_path = setup_test_store("rename_arg");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "rename", "1", "  Plates  "])
        .assert()
        .success()
        .stdout(contains("Renamed group 1 to 'Plates'"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Plates"));
}

#[test]
fn test_rename_whitespace_retains_old_label() {
    let store_path = setup_test_store("rename_ws");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "rename", "1", "   "])
        .assert()
        .success()
        .stdout(contains("keeping 'Dishes'"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Dishes"));
}

#[test]
fn test_color_with_palette_name() {
    let store_path = setup_test_store("color_name");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "color", "1", "green"])
        .assert()
        .success()
        .stdout(contains("Color #27ae60 set for group 'Dishes'"));
}

#[test]
fn test_color_rejects_unknown_token() {
    let store_path = setup_test_store("color_unknown");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "color", "1", "mauve"])
        .assert()
        .success()
        .stdout(contains("Unknown color 'mauve'"));
}

#[test]
fn test_name_set_changes_the_list_header() {
    let store_path = setup_test_store("name_header");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "name", "--set", "Ada"])
        .assert()
        .success()
        .stdout(contains("Username set to 'Ada'"));

    rt().args(["--store", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ada's Tally Marks"));
}

#[test]
fn test_log_print_records_operations() {
    let store_path = setup_test_store("log_print");
    init_store_with_groups(&store_path);

    rt().args(["--store", &store_path, "tally", "1"])
        .assert()
        .success();

    rt().args(["--store", &store_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Dishes"))
        .stdout(contains("count=1"));
}

#[test]
fn test_backup_copies_the_store() {
    let store_path = setup_test_store("backup_plain");
    init_store_with_groups(&store_path);
    let out = temp_out("backup_plain", "json");

    rt().args(["--store", &store_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_creates_zip() {
    let store_path = setup_test_store("backup_zip");
    init_store_with_groups(&store_path);
    let out = temp_out("backup_zip", "json");
    let zipped = out.replace(".json", ".zip");
    std::fs::remove_file(&zipped).ok();

    rt().args(["--store", &store_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zipped).exists());
}
