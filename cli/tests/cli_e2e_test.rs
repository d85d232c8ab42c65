use std::path::Path;

use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::tempdir;

fn fitsync() -> Command {
    cargo_bin_cmd!("fitsync")
}

/// Point every configurable path at the given directory so the test never
/// touches the invoking user's vault or session.
fn isolated(cmd: &mut Command, root: &Path) {
    cmd.env_clear()
        .env("FITSYNC_VAULT_DIR", root.join("Brain"))
        .env("FITSYNC_SESSION_DIR", root.join("session"))
        .env("FITSYNC_STATE_FILE", root.join("state/sync_state.json"));
}

mod help_and_version {
    use super::*;
    use predicates::prelude::predicate;

    #[test]
    fn test_help_flag() {
        fitsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("sync"))
            .stdout(predicate::str::contains("status"))
            .stdout(predicate::str::contains("login"));
    }

    #[test]
    fn test_version_flag() {
        fitsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("fitsync"));
    }

    #[test]
    fn test_no_args_shows_help() {
        fitsync()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_sync_help_shows_backfill_flag() {
        fitsync()
            .args(["sync", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--since"))
            .stdout(predicate::str::contains("--vault"))
            .stdout(predicate::str::contains("--json"));
    }
}

mod status_command {
    use super::*;
    use predicates::prelude::PredicateBooleanExt;
    use predicates::prelude::predicate;

    #[test]
    fn test_status_on_fresh_setup() {
        let dir = tempdir().unwrap();
        let mut cmd = fitsync();
        isolated(&mut cmd, dir.path());

        cmd.arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Fitsync Status"))
            .stdout(predicate::str::contains("2020-01-01"))
            // The login hint is advisory: stderr, never the report stream.
            .stderr(predicate::str::contains("fitsync login"))
            .stdout(predicate::str::contains("hint:").not());
    }

    #[test]
    fn test_status_json_reports_counts() {
        let dir = tempdir().unwrap();
        let workouts = dir.path().join("Brain/workouts");
        std::fs::create_dir_all(&workouts).unwrap();
        std::fs::write(
            workouts.join("2024-01-02-.md"),
            "---\ndate_of_workout: \"2024-01-02\"\ntype: \"Cardio\"\ngarmin_id: \"555\"\n---\n#workouts\n",
        )
        .unwrap();
        std::fs::write(
            workouts.join("2023-07-01-.md"),
            "---\ndate_of_workout: \"2023-07-01\"\ntype: \"Strength\"\n---\n#workouts\n",
        )
        .unwrap();

        let mut cmd = fitsync();
        isolated(&mut cmd, dir.path());
        let assert = cmd.args(["status", "--json"]).assert().success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["last_sync"], "2020-01-01T00:00:00");
        assert_eq!(value["vault"]["synced_notes"], 1);
        assert_eq!(value["vault"]["external_notes"], 1);
        assert_eq!(value["session_valid"], false);
    }

    #[test]
    fn test_status_honors_vault_flag() {
        let dir = tempdir().unwrap();
        let flagged = dir.path().join("Elsewhere");
        std::fs::create_dir_all(flagged.join("workouts")).unwrap();

        let mut cmd = fitsync();
        isolated(&mut cmd, dir.path());
        let assert = cmd
            .args(["status", "--json", "--vault"])
            .arg(&flagged)
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert!(
            value["vault"]["workouts_dir"]
                .as_str()
                .unwrap()
                .starts_with(flagged.to_str().unwrap())
        );
    }
}

mod sync_command {
    use super::*;
    use predicates::prelude::predicate;

    #[test]
    fn test_sync_rejects_malformed_since() {
        let dir = tempdir().unwrap();
        let mut cmd = fitsync();
        isolated(&mut cmd, dir.path());

        cmd.args(["sync", "--since", "last-tuesday"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid --since date"));
    }
}

mod completion_command {
    use super::*;
    use predicates::prelude::predicate;

    #[test]
    fn test_completion_bash() {
        fitsync()
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("fitsync"));
    }
}
