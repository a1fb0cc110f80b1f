use assert_cmd::Command;
use predicates::prelude::*;

const UUID: &str = "6f49a35b-5da9-4e92-bd13-5f7891845e09";
const B64: &str = "b0mjW12pTpK9E194kYReCQ==";

fn uuid64() -> Command {
    Command::cargo_bin("uuid64").unwrap()
}

#[test]
fn converts_uuid_argument() {
    uuid64()
        .arg(UUID)
        .assert()
        .success()
        .stdout(format!("{}\n", B64))
        .stderr("");
}

#[test]
fn converts_compact_uuid_argument() {
    uuid64()
        .arg("6f49a35b5da94e92bd135f7891845e09")
        .assert()
        .success()
        .stdout(format!("{}\n", B64));
}

#[test]
fn converts_uuid_from_stdin() {
    uuid64()
        .write_stdin(format!("  {}\n", UUID))
        .assert()
        .success()
        .stdout(format!("{}\n", B64));
}

#[test]
fn converts_base64_argument_back() {
    uuid64()
        .args(["--reverse", B64])
        .assert()
        .success()
        .stdout(format!("{}\n", UUID))
        .stderr("");
}

#[test]
fn converts_base64_from_stdin() {
    uuid64()
        .arg("-r")
        .write_stdin(B64)
        .assert()
        .success()
        .stdout(format!("{}\n", UUID));
}

#[test]
fn round_trips_a_v1_uuid() {
    uuid64()
        .arg("bbda7484-d89a-11ec-9d64-0242ac120002")
        .assert()
        .success()
        .stdout("u9p0hNiaEeydZAJCrBIAAg==\n");

    uuid64()
        .args(["-r", "u9p0hNiaEeydZAJCrBIAAg=="])
        .assert()
        .success()
        .stdout("bbda7484-d89a-11ec-9d64-0242ac120002\n");
}

#[test]
fn rejects_malformed_uuid() {
    uuid64()
        .arg("bad-arg")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("could not parse uuid bad-arg: "));
}

#[test]
fn rejects_malformed_base64() {
    uuid64()
        .args(["-r", "bad-arg"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "could not parse byte string bad-arg: ",
        ));
}

#[test]
fn reports_wrong_byte_count() {
    uuid64()
        .args(["-r", "YmxhaAo="])
        .assert()
        .failure()
        .code(1)
        .stderr("input byte string is not UUID compatible: invalid UUID (got 5 bytes)\n");
}

#[test]
fn prints_usage_without_input() {
    uuid64()
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn prints_usage_for_unknown_flag() {
    uuid64()
        .arg("--bogus")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("uuid64 --reverse [BASE64]"));
}
