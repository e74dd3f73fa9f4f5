//! Corpus preparation: tag stripping and train/test splitting

use anyhow::{ensure, Context, Result};
use rand::Rng;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Remove `<...>` tags from every line, dropping lines left empty
pub fn strip_tags(input: &Path, output: &Path) -> Result<()> {
    let tag = Regex::new(r"<.*?>").context("compiling tag pattern")?;
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading tagged corpus {}", input.display()))?;

    let mut cleaned = String::new();
    for line in content.lines() {
        let stripped = tag.replace_all(line, "");
        let stripped = stripped.trim();
        if !stripped.is_empty() {
            cleaned.push_str(stripped);
            cleaned.push('\n');
        }
    }

    fs::write(output, cleaned)
        .with_context(|| format!("writing stripped corpus {}", output.display()))?;
    Ok(())
}

/// Split a corpus into two files by line
///
/// Roughly `fraction` of the lines land in `first`, the rest in `second`.
/// Lines are assigned at random until one side reaches its quota; the
/// remainder then flows to the other side.
pub fn split_corpus<R: Rng>(
    fraction: f64,
    input: &Path,
    first: &Path,
    second: &Path,
    rng: &mut R,
) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&fraction),
        "split fraction {fraction} outside [0.0, 1.0]"
    );
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading corpus {}", input.display()))?;
    let lines: Vec<&str> = content.lines().collect();

    let first_quota = (lines.len() as f64 * fraction).floor() as usize;
    let second_quota = lines.len() - first_quota;

    let mut first_lines: Vec<&str> = Vec::with_capacity(first_quota);
    let mut second_lines: Vec<&str> = Vec::with_capacity(second_quota);
    for line in lines {
        if first_lines.len() >= first_quota {
            second_lines.push(line);
        } else if second_lines.len() >= second_quota {
            first_lines.push(line);
        } else if rng.gen_bool(0.5) {
            second_lines.push(line);
        } else {
            first_lines.push(line);
        }
    }

    write_lines(first, &first_lines)?;
    write_lines(second, &second_lines)?;
    Ok(())
}

fn write_lines(path: &Path, lines: &[&str]) -> Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("writing split file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tempfile::TempDir;

    #[test]
    fn tags_are_stripped_and_empty_lines_dropped() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tagged.txt");
        let output = dir.path().join("clean.txt");
        fs::write(&input, "<doc id=\"1\">\nHello <b>world</b>\n<p></p>\n").unwrap();

        strip_tags(&input, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Hello world\n");
    }

    #[test]
    fn split_partitions_all_lines() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corpus.txt");
        let first = dir.path().join("train.txt");
        let second = dir.path().join("test.txt");
        let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
        fs::write(&input, lines.join("\n")).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        split_corpus(0.9, &input, &first, &second, &mut rng).unwrap();

        let first_count = fs::read_to_string(&first).unwrap().lines().count();
        let second_count = fs::read_to_string(&second).unwrap().lines().count();
        assert_eq!(first_count + second_count, 100);
        assert_eq!(first_count, 90);
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corpus.txt");
        fs::write(&input, "a\nb\n").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = split_corpus(
            1.5,
            &input,
            &dir.path().join("x"),
            &dir.path().join("y"),
            &mut rng,
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside [0.0, 1.0]"));
    }
}
