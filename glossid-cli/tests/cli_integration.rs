//! Integration tests for the glossid CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a corpus of `lines` copies of `line` and return its path
fn write_corpus(dir: &Path, name: &str, line: &str, lines: usize) -> PathBuf {
    let path = dir.join(name);
    let content: Vec<&str> = std::iter::repeat(line).take(lines).collect();
    fs::write(&path, content.join("\n")).unwrap();
    path
}

fn glossid() -> Command {
    Command::cargo_bin("glossid").unwrap()
}

#[test]
fn identify_picks_the_matching_language() {
    let dir = TempDir::new().unwrap();
    let english = write_corpus(dir.path(), "english.txt", "the cat sat on the mat", 30);
    let other = write_corpus(dir.path(), "other.txt", "xyz qrs xyz qrs xyz", 30);
    let sample = write_corpus(dir.path(), "sample.txt", "the mat sat on the cat", 10);

    glossid()
        .arg("identify")
        .arg("-s")
        .arg(&sample)
        .arg("-t")
        .arg(format!("english={}", english.display()))
        .arg("-t")
        .arg(format!("other={}", other.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("identified: english"));
}

#[test]
fn identify_reports_a_tie_as_undecided() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), "corpus.txt", "the cat sat on the mat", 30);
    let sample = write_corpus(dir.path(), "sample.txt", "the cat sat on the mat", 10);

    // The same corpus under two labels produces identical distances.
    glossid()
        .arg("identify")
        .arg("-s")
        .arg(&sample)
        .arg("-t")
        .arg(format!("a={}", corpus.display()))
        .arg("-t")
        .arg(format!("b={}", corpus.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("undecided"));
}

#[test]
fn identify_emits_json_reports() {
    let dir = TempDir::new().unwrap();
    let english = write_corpus(dir.path(), "english.txt", "the cat sat on the mat", 30);
    let other = write_corpus(dir.path(), "other.txt", "xyz qrs xyz qrs xyz", 30);
    let sample = write_corpus(dir.path(), "sample.txt", "the mat sat on the cat", 10);

    glossid()
        .arg("identify")
        .arg("-s")
        .arg(&sample)
        .arg("-t")
        .arg(format!("english={}", english.display()))
        .arg("-t")
        .arg(format!("other={}", other.display()))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"english\""))
        .stdout(predicate::str::contains("\"candidates\""));
}

#[test]
fn table_writes_rank_ordered_csv() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), "corpus.txt", "ababab cdcd", 5);
    let output = dir.path().join("freq.csv");

    glossid()
        .arg("table")
        .arg("-i")
        .arg(&corpus)
        .arg("-l")
        .arg("test")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    let rows: Vec<(&str, u64)> = content
        .lines()
        .map(|line| {
            let (bigram, count) = line.rsplit_once(',').unwrap();
            (bigram, count.parse().unwrap())
        })
        .collect();
    assert!(!rows.is_empty());
    for window in rows.windows(2) {
        assert!(window[0].1 >= window[1].1);
    }
    // "ab" dominates the corpus and heads the table.
    assert_eq!(rows[0].0, "ab");
}

#[test]
fn prepare_strips_tags() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tagged.txt");
    let output = dir.path().join("clean.txt");
    fs::write(&input, "<doc>\nHello <b>world</b>\n</doc>\n").unwrap();

    glossid()
        .arg("prepare")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Hello world\n");
}

#[test]
fn prepare_splits_with_a_seed() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.txt");
    let output = dir.path().join("clean.txt");
    let train = dir.path().join("train.txt");
    let test = dir.path().join("test.txt");
    let lines: Vec<String> = (0..50).map(|i| format!("line number {i}")).collect();
    fs::write(&input, lines.join("\n")).unwrap();

    glossid()
        .arg("prepare")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--split")
        .arg("0.8")
        .arg("--train")
        .arg(&train)
        .arg("--test")
        .arg(&test)
        .arg("--seed")
        .arg("7")
        .assert()
        .success();

    let train_count = fs::read_to_string(&train).unwrap().lines().count();
    let test_count = fs::read_to_string(&test).unwrap().lines().count();
    assert_eq!(train_count, 40);
    assert_eq!(train_count + test_count, 50);
}

#[test]
fn prepare_rejects_bad_fractions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.txt");
    fs::write(&input, "a line\n").unwrap();

    glossid()
        .arg("prepare")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("clean.txt"))
        .arg("--split")
        .arg("1.5")
        .arg("--train")
        .arg(dir.path().join("train.txt"))
        .arg("--test")
        .arg(dir.path().join("test.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside [0.0, 1.0]"));
}

#[test]
fn cross_validate_reports_a_pass_rate() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(dir.path(), "abish.txt", "ababab ababab ababab", 40);
    let other = write_corpus(dir.path(), "xyish.txt", "xyxyxy xyxyxy xyxyxy", 40);
    let log = dir.path().join("folds.csv");

    glossid()
        .arg("cross-validate")
        .arg("-i")
        .arg(&corpus)
        .arg("-l")
        .arg("abish")
        .arg("-t")
        .arg(format!("xyish={}", other.display()))
        .arg("-k")
        .arg("4")
        .arg("--log-csv")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("abish: 4/4 folds correct"));

    // Two comparison rows per fold: the held-in profile and the other language.
    let rows = fs::read_to_string(&log).unwrap().lines().count();
    assert_eq!(rows, 8);
}

#[test]
fn min_sample_converges_on_a_clean_signal() {
    let dir = TempDir::new().unwrap();
    let abish = write_corpus(dir.path(), "abish.txt", "ababab ababab ababab", 20);
    let xyish = write_corpus(dir.path(), "xyish.txt", "xyxyxy xyxyxy xyxyxy", 20);

    glossid()
        .arg("min-sample")
        .arg("-s")
        .arg(&abish)
        .arg("-l")
        .arg("abish")
        .arg("-t")
        .arg(format!("abish={}", abish.display()))
        .arg("-t")
        .arg(format!("xyish={}", xyish.display()))
        .arg("--trials")
        .arg("20")
        .arg("--seed")
        .arg("11")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("smallest reliable sample for abish"));
}
