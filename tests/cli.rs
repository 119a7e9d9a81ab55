//! End-to-end tests for the tabrow binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const PORTFOLIO: &str = "\
name,shares,price
GOOG,100,490.10
AAPL,50,261.10
";

fn portfolio_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PORTFOLIO.as_bytes()).unwrap();
    file
}

#[test]
fn csv_dialect_round_trips_the_data() {
    let file = portfolio_file();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args(["--types", "str,int,float", "--format", "csv"])
        .assert()
        .success()
        .stdout("name,shares,price\nGOOG,100,490.1\nAAPL,50,261.1\n");
}

#[test]
fn text_dialect_pads_to_ten_columns() {
    let file = portfolio_file();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args(["--types", "str,int,float"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      name     shares      price"))
        .stdout(predicate::str::contains("---------- ---------- ----------"))
        .stdout(predicate::str::contains("      GOOG        100      490.1"));
}

#[test]
fn html_dialect_wraps_cells_in_tags() {
    let file = portfolio_file();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args(["--types", "str,int,float", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<tr> <th>name</th> <th>shares</th> <th>price</th> </tr>",
        ))
        .stdout(predicate::str::contains(
            "<tr> <td>GOOG</td> <td>100</td> <td>490.1</td> </tr>",
        ));
}

#[test]
fn decorators_apply_from_the_command_line() {
    let file = portfolio_file();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args([
            "--types",
            "str,int,float",
            "--format",
            "csv",
            "--upper",
            "--column-format",
            "%s,%d,%0.2f",
        ])
        .assert()
        .success()
        .stdout("NAME,SHARES,PRICE\nGOOG,100,490.10\nAAPL,50,261.10\n");
}

#[test]
fn bad_cell_reports_the_source_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"name,shares,price\nGOOG,100,490.10\nAAPL,N/A,261.10\n")
        .unwrap();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args(["--types", "str,int,float"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("shares"));
}

#[test]
fn untyped_columns_default_to_text() {
    let file = portfolio_file();
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg(file.path())
        .args(["--format", "csv", "--columns", "price,name"])
        .assert()
        .success()
        .stdout("price,name\n490.10,GOOG\n261.10,AAPL\n");
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("tabrow")
        .unwrap()
        .arg("no-such-file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
