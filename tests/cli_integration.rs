use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("cards.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "bulbasaur-base", "name": "Bulbasaur", "number": "44",
             "set": "Base Set", "era": "Original", "sheet_no": "1",
             "variations": {
                "normal": {"default_language": "EN",
                           "available_languages": ["EN", "JP"]},
                "reverse_holo": {"default_language": "EN",
                                 "available_languages": ["EN"]}}},
            {"id": "ivysaur-base", "name": "Ivysaur", "number": "30",
             "set": "Base Set", "era": "Original", "sheet_no": "2"}
        ]"#,
    )
    .unwrap();
    path
}

fn cardz(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardz").unwrap();
    cmd.arg("--data").arg(data_dir);
    cmd.arg("--catalog").arg(data_dir.join("cards.json"));
    cmd
}

fn sign_up(data_dir: &Path) {
    cardz(data_dir)
        .args(["signup", "ash@pallet.town", "pikachu123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ash@pallet.town"));
}

#[test]
fn test_signup_increment_and_stats() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["inc", "bulbasaur-base", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbasaur (normal): 1 owned"));

    cardz(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards"))
        .stdout(predicate::str::contains("owned: 1"))
        .stdout(predicate::str::contains("complete: 50%"));
}

#[test]
fn test_list_filters_by_status() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["inc", "bulbasaur-base", "normal"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["list", "--status", "owned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbasaur"))
        .stdout(predicate::str::contains("Ivysaur").not());

    cardz(temp_dir.path())
        .args(["list", "--status", "no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivysaur"))
        .stdout(predicate::str::contains("Bulbasaur").not());
}

#[test]
fn test_show_lists_variations_with_badges() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["inc", "bulbasaur-base", "reverse_holo"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["show", "bulbasaur-base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbasaur"))
        .stdout(predicate::str::contains("reverse_holo [Reverse Holo]"))
        .stdout(predicate::str::contains("1 owned"));
}

#[test]
fn test_share_link_and_viewer_is_read_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["inc", "bulbasaur-base", "normal"])
        .assert()
        .success();

    let output = cardz(temp_dir.path()).arg("share").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let link = stdout
        .lines()
        .find(|l| l.contains("?user="))
        .expect("share output should contain a link")
        .trim()
        .to_string();

    // A viewer sees the owner's collection but cannot change it.
    cardz(temp_dir.path())
        .args(["--user", &link, "list", "--status", "owned"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulbasaur"));

    cardz(temp_dir.path())
        .args(["--user", &link, "inc", "bulbasaur-base", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changes are disabled"));

    cardz(temp_dir.path())
        .args(["--user", &link, "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("owned: 1"));
}

#[test]
fn test_language_toggle_rules() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["inc", "bulbasaur-base", "normal"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["lang", "bulbasaur-base", "normal", "JP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JP added"));

    // A language the template does not offer is refused.
    cardz(temp_dir.path())
        .args(["lang", "bulbasaur-base", "normal", "DE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not available"));
}

#[test]
fn test_logout_requires_sign_in_again() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));

    // Login restores access to the same collection.
    cardz(temp_dir.path())
        .args(["login", "ash@pallet.town", "--password", "pikachu123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ash@pallet.town"));
}

#[test]
fn test_auth_error_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    cardz(temp_dir.path())
        .args(["signup", "ash@pallet.town", "pikachu123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Email already in use. Try signing in instead.",
        ));

    cardz(temp_dir.path())
        .args(["signup", "misty@cerulean.gym", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password is too weak (minimum 6 characters)",
        ));

    cardz(temp_dir.path())
        .args(["login", "nobody@nowhere.org", "--password", "whatever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No account found with this email. Try signing up first.",
        ));

    cardz(temp_dir.path())
        .args(["login", "ash@pallet.town", "--password", "wrong1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password"));
}

#[test]
fn test_missing_catalog_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    sign_up_without_catalog(temp_dir.path());

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

fn sign_up_without_catalog(data_dir: &Path) {
    // Auth commands never touch the catalog, so this succeeds.
    cardz(data_dir)
        .args(["signup", "ash@pallet.town", "pikachu123"])
        .assert()
        .success();
}

#[test]
fn test_decrement_and_order_flow() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_catalog(temp_dir.path());
    sign_up(temp_dir.path());

    // Pending order at count zero, cleared by the first copy.
    cardz(temp_dir.path())
        .args(["order", "ivysaur-base", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as ordered"));

    cardz(temp_dir.path())
        .args(["list", "--status", "ordered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivysaur"));

    cardz(temp_dir.path())
        .args(["inc", "ivysaur-base", "normal"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .args(["list", "--status", "ordered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards match."));

    // Back down to zero; decrementing again is a no-op.
    cardz(temp_dir.path())
        .args(["dec", "ivysaur-base", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 owned"));

    cardz(temp_dir.path())
        .args(["dec", "ivysaur-base", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no change"));
}
