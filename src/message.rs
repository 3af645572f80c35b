use crate::allocator::Pairing;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Message used when no template file is supplied.
pub const DEFAULT_TEMPLATE: &str = "\
Hello {santa},

You are the secret santa for {recipient} this year. Keep it to yourself!
";

/// Substitutes every `{santa}` and `{recipient}` token in the template.
pub fn render(template: &str, santa: &str, recipient: &str) -> String {
    template
        .replace("{santa}", santa)
        .replace("{recipient}", recipient)
}

/// Writes one `<santa>.txt` per pairing into `out_dir`, creating the
/// directory if needed. Fails if any pairing has no recipient yet.
pub fn write_messages(pairings: &[Pairing], template: &str, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    for pairing in pairings {
        let recipient = pairing
            .recipient
            .as_deref()
            .ok_or_else(|| anyhow!("no recipient allocated for {}", pairing.santa))?;
        let body = render(template, &pairing.santa, recipient);
        let path = out_dir.join(format!("{}.txt", pairing.santa));
        fs::write(&path, body)
            .with_context(|| format!("failed to write message file: {}", path.display()))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct RevealEntry<'a> {
    santa: &'a str,
    recipient: &'a str,
}

/// Dumps the full (santa, recipient) list as pretty JSON for the organizer,
/// to a file or to stdout when `target` is "-".
pub fn export_reveal(pairings: &[Pairing], target: &str) -> Result<()> {
    let entries = pairings
        .iter()
        .map(|pairing| {
            let recipient = pairing
                .recipient
                .as_deref()
                .ok_or_else(|| anyhow!("no recipient allocated for {}", pairing.santa))?;
            Ok(RevealEntry {
                santa: &pairing.santa,
                recipient,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let serialized = serde_json::to_string_pretty(&entries)?;

    if target == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(serialized.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        fs::write(target, serialized)
            .with_context(|| format!("failed to write reveal file: {}", target))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(santa: &str, recipient: &str) -> Pairing {
        Pairing {
            santa: santa.to_string(),
            recipient: Some(recipient.to_string()),
        }
    }

    #[test]
    fn render_substitutes_both_tokens() {
        let body = render("{santa} gives to {recipient}", "Alice", "Bob");
        assert_eq!(body, "Alice gives to Bob");
    }

    #[test]
    fn render_substitutes_repeated_tokens() {
        let body = render("{recipient}, {recipient}!", "Alice", "Bob");
        assert_eq!(body, "Bob, Bob!");
    }

    #[test]
    fn default_template_mentions_the_recipient() {
        let body = render(DEFAULT_TEMPLATE, "Alice", "Bob");
        assert!(body.contains("Hello Alice"));
        assert!(body.contains("secret santa for Bob"));
        assert!(!body.contains('{'));
    }

    #[test]
    fn writes_one_file_per_santa() {
        let out_dir =
            std::env::temp_dir().join(format!("santa-allocator-test-{}", std::process::id()));
        let pairings = vec![assigned("Alice", "Bob"), assigned("Bob", "Alice")];

        write_messages(&pairings, "{santa} -> {recipient}", &out_dir).unwrap();

        let alice = fs::read_to_string(out_dir.join("Alice.txt")).unwrap();
        let bob = fs::read_to_string(out_dir.join("Bob.txt")).unwrap();
        assert_eq!(alice, "Alice -> Bob");
        assert_eq!(bob, "Bob -> Alice");

        fs::remove_dir_all(&out_dir).unwrap();
    }

    #[test]
    fn refuses_unallocated_pairings() {
        let out_dir = std::env::temp_dir().join("santa-allocator-test-unallocated");
        let pairings = vec![Pairing::new("Alice")];
        assert!(write_messages(&pairings, DEFAULT_TEMPLATE, &out_dir).is_err());
    }
}
