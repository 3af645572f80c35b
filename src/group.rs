use crate::allocator::Pairing;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parses a group listing, one participant name per line. Surrounding
/// whitespace is stripped and blank lines are skipped. Duplicate names are
/// rejected since the draw identifies participants by exact name.
pub fn parse_group(contents: &str) -> Result<Vec<Pairing>> {
    let mut seen = HashSet::new();
    let mut pairings = Vec::new();
    for line in contents.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            bail!("duplicate participant in group: {}", name);
        }
        pairings.push(Pairing::new(name));
    }
    Ok(pairings)
}

pub fn import_group(path: &Path) -> Result<Vec<Pairing>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read group file: {}", path.display()))?;
    parse_group(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_name_per_line() {
        let pairings = parse_group("Alice\nBob\nCarol\n").unwrap();
        let names: Vec<&str> = pairings.iter().map(|p| p.santa.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert!(pairings.iter().all(|p| p.recipient.is_none()));
    }

    #[test]
    fn trims_whitespace_and_skips_blank_lines() {
        let pairings = parse_group("  Alice \n\n\tBob\t\n   \n").unwrap();
        let names: Vec<&str> = pairings.iter().map(|p| p.santa.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = parse_group("Alice\nBob\nAlice\n").unwrap_err();
        assert!(err.to_string().contains("Alice"));
    }
}
