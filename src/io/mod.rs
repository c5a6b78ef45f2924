// src/io/mod.rs
pub mod text;
pub mod xyz;

use crate::model::library::{default_animation_sequence, water};
use crate::model::Molecule;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use text::StructureDoc;

/// A molecule together with the step script that animates it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedMolecule {
    pub molecule: Molecule,
    pub sequence: Vec<String>,
}

impl AnimatedMolecule {
    /// Built-in water demo.
    pub fn demo() -> Self {
        Self {
            molecule: water(),
            sequence: default_animation_sequence(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MoleculeDocument {
    #[serde(default)]
    formula: Option<String>,
    #[serde(default)]
    structure: Option<StructureDoc>,
    #[serde(default)]
    animation_sequence: Option<Vec<String>>,
}

pub fn load_molecule(path: &str) -> io::Result<AnimatedMolecule> {
    let p = path.to_lowercase();
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Molecule".to_string());

    if p.ends_with(".xyz") {
        Ok(AnimatedMolecule {
            molecule: xyz::parse(path, &stem)?,
            sequence: default_animation_sequence(),
        })
    } else if p.ends_with(".txt") || p.ends_with(".md") {
        Ok(parse_response_file(&fs::read_to_string(path)?, &stem))
    } else {
        parse_document(&fs::read_to_string(path)?, &stem)
    }
}

/// Parses the JSON input document. `default_formula` is used when the
/// document does not name one.
pub fn parse_document(content: &str, default_formula: &str) -> io::Result<AnimatedMolecule> {
    let doc: MoleculeDocument = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let formula = doc
        .formula
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| default_formula.to_string());

    let molecule = match doc.structure {
        Some(structure) if !structure.atoms.is_empty() => structure.into_molecule(&formula),
        _ => {
            log::warn!("Document has no atoms, using built-in layout for {}", formula);
            crate::model::library::fallback_for(&formula)
        }
    };

    let sequence = match doc.animation_sequence {
        Some(seq) if !seq.is_empty() => seq,
        _ => default_animation_sequence(),
    };

    Ok(AnimatedMolecule { molecule, sequence })
}

/// Plain-text assistant output: a structure section and an animation section
/// separated by a `---` line. A missing animation section gives the default
/// script.
pub fn parse_response_file(content: &str, formula: &str) -> AnimatedMolecule {
    let mut sections = vec![String::new()];
    for line in content.lines() {
        if line.trim() == "---" {
            sections.push(String::new());
        } else if let Some(current) = sections.last_mut() {
            current.push_str(line);
            current.push('\n');
        }
    }

    let molecule = text::structure_from_response(&sections[0], formula);
    let sequence = match sections.get(1) {
        Some(script) if !script.trim().is_empty() => text::sequence_from_response(script),
        _ => default_animation_sequence(),
    };

    AnimatedMolecule { molecule, sequence }
}
