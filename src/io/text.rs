// src/io/text.rs
// Free-text structure and script descriptions, as produced by chat-style
// assistants: JSON embedded in prose, or "C at (0, 0, 0)" listings.

use crate::model::library::fallback_for;
use crate::model::{Atom, Molecule};
use serde::Deserialize;

const SCRIPT_LENGTH: usize = 5;

#[derive(Debug, Deserialize)]
pub struct StructureDoc {
    #[serde(default)]
    pub atoms: Vec<Atom>,
    #[serde(default)]
    pub description: Option<String>,
}

impl StructureDoc {
    pub fn into_molecule(self, formula: &str) -> Molecule {
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Molecular structure of {}", formula));
        Molecule::new(formula, self.atoms, description)
    }
}

/// Greedy slice from the first `{` to the last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_between(text, '{', '}')
}

/// Greedy slice from the first `[` to the last `]`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_between(text, '[', ']')
}

fn extract_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Pulls atoms out of lines like `C at (0, 0, 0)` or `- H at (1,1,1) pointing up`.
/// Falls back to the built-in structure for `formula` when nothing parses.
pub fn parse_structure_text(text: &str, formula: &str) -> Molecule {
    let mut atoms = Vec::new();

    for line in text.lines() {
        if !line.to_lowercase().contains(" at ") {
            continue;
        }
        let parts: Vec<&str> = line.split(" at ").collect();
        if parts.len() != 2 {
            continue;
        }

        let Some(element) = parts[0].trim().split(' ').next().filter(|e| !e.is_empty()) else {
            continue;
        };
        let Some(coords) = parse_coordinate_triple(parts[1]) else {
            log::debug!("Skipping unparsable coordinates in line: {}", line.trim());
            continue;
        };

        atoms.push(Atom::new(element, coords));
    }

    if atoms.is_empty() {
        log::warn!("No atoms found in structure text, using built-in layout for {}", formula);
        return fallback_for(formula);
    }

    Molecule::new(formula, atoms, format!("Molecular structure of {}", formula))
}

fn parse_coordinate_triple(text: &str) -> Option<[f64; 3]> {
    let open = text.find('(')?;
    let close = open + text[open..].find(')')?;
    let values: Vec<f64> = text[open + 1..close]
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match values.as_slice() {
        [x, y, z] => Some([*x, *y, *z]),
        _ => None,
    }
}

/// One step label per meaningful line, numbering stripped, padded or
/// truncated to five steps.
pub fn parse_animation_text(text: &str) -> Vec<String> {
    let mut steps: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('{') && !l.starts_with('}'))
        .map(strip_numbering)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    while steps.len() < SCRIPT_LENGTH {
        steps.push(format!("Animation step {}", steps.len() + 1));
    }
    steps.truncate(SCRIPT_LENGTH);
    steps
}

/// Removes a leading `1.`, `2)`, `3:`, `Step 4:` or `*` marker.
fn strip_numbering(line: &str) -> &str {
    let is_digit = |c: char| c.is_ascii_digit();

    if let Some(rest) = line.strip_prefix('*') {
        return rest.trim_start();
    }
    if let Some(rest) = line.strip_prefix("Step ") {
        let after = rest.trim_start_matches(is_digit);
        if after.len() < rest.len() {
            if let Some(rest) = after.strip_prefix(':') {
                return rest.trim_start();
            }
        }
    }
    let after = line.trim_start_matches(is_digit);
    if after.len() < line.len() {
        if let Some(rest) = after.strip_prefix(|c: char| matches!(c, '.' | ')' | ':')) {
            return rest.trim_start();
        }
    }
    line
}

/// Structure section: embedded JSON first, then the line parser.
pub fn structure_from_response(text: &str, formula: &str) -> Molecule {
    if let Some(json) = extract_json_object(text) {
        match serde_json::from_str::<StructureDoc>(json) {
            Ok(doc) if !doc.atoms.is_empty() => return doc.into_molecule(formula),
            Ok(_) => log::warn!("Embedded structure JSON has no atoms"),
            Err(e) => log::warn!("Error parsing structure JSON: {}", e),
        }
    }
    parse_structure_text(text, formula)
}

/// Script section: embedded JSON array first, then the line parser.
pub fn sequence_from_response(text: &str) -> Vec<String> {
    if let Some(json) = extract_json_array(text) {
        match serde_json::from_str::<Vec<String>>(json) {
            Ok(steps) if !steps.is_empty() => return steps,
            Ok(_) => log::warn!("Embedded animation JSON is empty"),
            Err(e) => log::warn!("Error parsing animation JSON: {}", e),
        }
    }
    parse_animation_text(text)
}
