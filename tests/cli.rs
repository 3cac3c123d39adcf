//! Integration tests for the `env-preflight` binary.

use assert_cmd::Command;
use env_preflight::config::REQUIRED_ENV_VARS;
use predicates::prelude::*;

/// Build a command for the binary with an empty environment and no `.env`.
fn preflight_cmd() -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("env-preflight");
    cmd.env_clear();
    cmd
}

#[test]
fn all_keys_set_exits_zero_with_notice() {
    let mut cmd = preflight_cmd();
    for key in REQUIRED_ENV_VARS {
        cmd.env(key.name, "configured");
    }

    cmd.arg("--no-dotenv")
        .assert()
        .success()
        .stdout("✓ All environment variables are set\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_keys_exit_one_with_error_line() {
    preflight_cmd()
        .arg("--no-dotenv")
        .env("NEXT_PUBLIC_SUPABASE_URL", "https://db.example")
        .env("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon")
        .env("RAZORPAY_KEY_ID", "rzp_id")
        .env("RAZORPAY_KEY_SECRET", "")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            "✗ Configuration error: Missing environment variables: \
             RAZORPAY_KEY_SECRET, RAZORPAY_WEBHOOK_SECRET\n",
        );
}

#[test]
fn csv_report_is_printed_and_still_fails() {
    preflight_cmd()
        .args(["--no-dotenv", "--report", "csv"])
        .env("NEXT_PUBLIC_SUPABASE_URL", "https://db.example")
        .env("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon")
        .env("RAZORPAY_KEY_ID", "rzp_id")
        .env("RAZORPAY_KEY_SECRET", "")
        .assert()
        .code(1)
        .stdout(
            "key,service,present\n\
             NEXT_PUBLIC_SUPABASE_URL,database,true\n\
             NEXT_PUBLIC_SUPABASE_ANON_KEY,database,true\n\
             RAZORPAY_KEY_ID,payments,true\n\
             RAZORPAY_KEY_SECRET,payments,false\n\
             RAZORPAY_WEBHOOK_SECRET,payments,false\n",
        )
        .stderr(predicate::str::contains(
            "Missing environment variables: RAZORPAY_KEY_SECRET, RAZORPAY_WEBHOOK_SECRET",
        ));
}

#[test]
fn report_skips_notice_when_complete() {
    let mut cmd = preflight_cmd();
    for key in REQUIRED_ENV_VARS {
        cmd.env(key.name, "configured");
    }

    cmd.args(["--no-dotenv", "--report", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"checked_at\""))
        .stdout(predicate::str::contains("All environment variables are set").not());
}

#[test]
fn env_file_conflicts_with_no_dotenv() {
    preflight_cmd()
        .args(["--no-dotenv", "--env-file", "custom.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
