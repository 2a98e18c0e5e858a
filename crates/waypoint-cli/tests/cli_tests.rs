use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the test database
fn wp_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Creates an itinerary and returns its ID from the confirmation line
fn create_itinerary(db_path: &Path, title: &str) -> String {
    let output = wp_cmd(db_path)
        .args(["itinerary", "create", title])
        .output()
        .expect("Failed to run wp");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Non UTF-8 output");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created itinerary with ID: "))
        .expect("No itinerary ID in output")
        .trim()
        .to_string()
}

fn created_id(stdout: &[u8], label: &str) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let prefix = format!("Created {label} with ID: ");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .expect("No ID in output")
        .trim()
        .to_string()
}

#[test]
fn test_cli_create_itinerary() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args([
            "itinerary",
            "create",
            "Bali Highlights",
            "--description",
            "<p>Temples and rice terraces</p>",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created itinerary with ID:"))
        .stdout(predicate::str::contains("# Bali Highlights"))
        .stdout(predicate::str::contains("Temples and rice terraces"));
}

#[test]
fn test_cli_create_itinerary_blank_title_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args(["itinerary", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create itinerary"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args(["itinerary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No itineraries found."));
}

#[test]
fn test_cli_default_command_lists_itineraries() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Lombok Escape");

    wp_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Lombok Escape"))
        .stdout(predicate::str::contains(id));
}

#[test]
fn test_cli_list_limit() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    create_itinerary(&db_path, "First Trip");
    create_itinerary(&db_path, "Second Trip");

    wp_cmd(&db_path)
        .args(["itinerary", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second Trip"))
        .stdout(predicate::str::contains("First Trip").not());
}

#[test]
fn test_cli_build_days_and_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Java Overland");

    let output = wp_cmd(&db_path)
        .args(["activity", "add", "Borobudur sunrise"])
        .output()
        .unwrap();
    let activity_id = created_id(&output.stdout, "activity");

    wp_cmd(&db_path)
        .args(["day", "add", id.as_str(), "--title", "Yogyakarta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added day 1"))
        .stdout(predicate::str::contains("- Days created: 1"))
        .stdout(predicate::str::contains("- Day order updated"));

    wp_cmd(&db_path)
        .args(["item", "add", id.as_str(), "1", "--activities", activity_id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added item 1 to day 1"))
        .stdout(predicate::str::contains("- Items created: 1"));

    wp_cmd(&db_path)
        .args([
            "item",
            "add",
            id.as_str(),
            "1",
            "--kind",
            "note",
            "--title",
            "Free evening",
        ])
        .assert()
        .success();

    wp_cmd(&db_path)
        .args(["itinerary", "show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Day 1: Yogyakarta"))
        .stdout(predicate::str::contains("### Borobudur sunrise (Activity)"))
        .stdout(predicate::str::contains("### Free evening (Note)"));
}

#[test]
fn test_cli_move_and_remove_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Sulawesi");

    wp_cmd(&db_path).args(["day", "add", id.as_str()]).assert().success();
    for title in ["Breakfast", "Market"] {
        wp_cmd(&db_path)
            .args(["item", "add", id.as_str(), "1", "--kind", "note", "--title", title])
            .assert()
            .success();
    }

    wp_cmd(&db_path)
        .args(["item", "move", id.as_str(), "1", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved item 2 to position 1 in day 1"))
        .stdout(predicate::str::contains("- Item lists rewritten: 1"));

    wp_cmd(&db_path)
        .args(["item", "remove", id.as_str(), "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Items deleted: 1"));

    wp_cmd(&db_path)
        .args(["itinerary", "show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Market (Note)"))
        .stdout(predicate::str::contains("Breakfast").not());
}

#[test]
fn test_cli_unknown_day_fails_without_writes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Maluku");

    wp_cmd(&db_path)
        .args(["day", "remove", id.as_str(), "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Day 3 does not exist"));
}

#[test]
fn test_cli_day_zero_rejected_by_parser() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args(["day", "remove", "whatever", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_hotels_require_stay_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Bintan");
    wp_cmd(&db_path).args(["day", "add", id.as_str()]).assert().success();

    wp_cmd(&db_path)
        .args(["item", "add", id.as_str(), "1", "--hotels", "hotel-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--hotels only applies to stay items"));

    wp_cmd(&db_path)
        .args(["item", "add", id.as_str(), "1", "--kind", "stay", "--hotels", "hotel-1"])
        .assert()
        .success();
}

#[test]
fn test_cli_edit_itinerary_header() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Flores");

    wp_cmd(&db_path)
        .args(["itinerary", "edit", id.as_str(), "--title", "Flores and Komodo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited title"))
        .stdout(predicate::str::contains("- Itinerary details updated"));

    wp_cmd(&db_path)
        .args(["itinerary", "edit", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to edit"));
}

#[test]
fn test_cli_delete_itinerary() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Short Break");
    wp_cmd(&db_path).args(["day", "add", id.as_str()]).assert().success();

    wp_cmd(&db_path)
        .args(["itinerary", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Deleted itinerary with ID: {id}"
        )));

    wp_cmd(&db_path)
        .args(["itinerary", "show", id.as_str()])
        .assert()
        .failure();
}

#[test]
fn test_cli_catalog_commands() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args(["hotel", "add", "Ubud Hanging Gardens", "--kind", "resort", "--stars", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created hotel with ID:"));

    wp_cmd(&db_path)
        .args(["hotel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ubud Hanging Gardens"))
        .stdout(predicate::str::contains("Resort"));

    wp_cmd(&db_path)
        .args(["segment", "add", "DELUXE"])
        .assert()
        .success();
    wp_cmd(&db_path)
        .args(["segment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELUXE"));

    wp_cmd(&db_path)
        .args(["destination", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No destinations found."));
}

#[test]
fn test_cli_catalog_update_and_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let output = wp_cmd(&db_path)
        .args(["hotel", "add", "Kuta Inn", "--stars", "2"])
        .output()
        .unwrap();
    let hotel_id = created_id(&output.stdout, "hotel");

    wp_cmd(&db_path)
        .args(["hotel", "update", hotel_id.as_str(), "--name", "Kuta Beach Inn", "--stars", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated hotel with ID: {hotel_id}")))
        .stdout(predicate::str::contains("- Updated name"))
        .stdout(predicate::str::contains("- Updated star rating"));

    wp_cmd(&db_path)
        .args(["hotel", "update", hotel_id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));

    let output = wp_cmd(&db_path)
        .args(["segment", "add", "BUDGET"])
        .output()
        .unwrap();
    let segment_id = created_id(&output.stdout, "price segment");

    wp_cmd(&db_path)
        .args(["segment", "update", segment_id.as_str(), "ECONOMY"])
        .assert()
        .success();
    wp_cmd(&db_path)
        .args(["segment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ECONOMY"))
        .stdout(predicate::str::contains("BUDGET").not());

    wp_cmd(&db_path)
        .args(["hotel", "delete", hotel_id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted hotel with ID: {hotel_id}")));
    wp_cmd(&db_path)
        .args(["hotel", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kuta Beach Inn").not());

    wp_cmd(&db_path)
        .args(["activity", "delete", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete activity missing"));
}

#[test]
fn test_cli_edit_itinerary_use_template() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_itinerary(&db_path, "Raja Ampat");

    wp_cmd(&db_path)
        .args(["itinerary", "edit", id.as_str(), "--terms", "<p>Custom terms</p>"])
        .assert()
        .success();
    wp_cmd(&db_path)
        .args(["settings", "set", "--terms-template", "<p>Standard terms</p>"])
        .assert()
        .success();

    wp_cmd(&db_path)
        .args(["itinerary", "edit", id.as_str(), "--use-template", "terms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited terms from template"))
        .stdout(predicate::str::contains("- Itinerary details updated"));

    wp_cmd(&db_path)
        .args(["itinerary", "show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard terms"))
        .stdout(predicate::str::contains("Custom terms").not());
}

#[test]
fn test_cli_settings() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Company: (not set)"));

    wp_cmd(&db_path)
        .args(["settings", "set", "--company-name", "Archipelago Tours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated company name"));

    wp_cmd(&db_path)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Company: Archipelago Tours"));

    wp_cmd(&db_path)
        .args(["settings", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No settings given"));
}

#[test]
fn test_cli_help() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wp_cmd(&db_path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("itinerary"))
        .stdout(predicate::str::contains("settings"));
}
