// src/model/library.rs
// Built-in demo structures used when no input is given or parsing finds nothing.

use super::structure::{Atom, Molecule};

pub fn water() -> Molecule {
    Molecule::new(
        "H2O",
        vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [1.0, 0.0, 0.0]),
            Atom::new("H", [-1.0, 0.0, 0.0]),
        ],
        "Water (H₂O) molecule with oxygen at center and two hydrogen atoms.",
    )
}

pub fn carbon_dioxide() -> Molecule {
    Molecule::new(
        "CO2",
        vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [1.2, 0.0, 0.0]),
            Atom::new("O", [-1.2, 0.0, 0.0]),
        ],
        "Molecular structure of CO2",
    )
}

pub fn methane() -> Molecule {
    Molecule::new(
        "CH4",
        vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("H", [1.0, 0.0, 0.0]),
            Atom::new("H", [-1.0, 0.0, 0.0]),
            Atom::new("H", [0.0, 1.0, 0.0]),
            Atom::new("H", [0.0, -1.0, 0.0]),
        ],
        "Molecular structure of CH4",
    )
}

/// Structure used when nothing could be parsed for `formula`.
pub fn fallback_for(formula: &str) -> Molecule {
    let mut mol = match formula.to_lowercase().as_str() {
        "h2o" => water(),
        "co2" => carbon_dioxide(),
        "ch4" => methane(),
        _ => Molecule::new(formula, vec![Atom::new(formula, [0.0, 0.0, 0.0])], ""),
    };
    mol.formula = formula.to_string();
    mol.description = format!("Molecular structure of {}", formula);
    mol
}

pub fn default_animation_sequence() -> Vec<String> {
    [
        "Rotate the molecule 360 degrees around the Y-axis",
        "Zoom in to show the oxygen atom",
        "Zoom out to show the full molecule",
        "Vibrate the hydrogen atoms slightly",
        "Return to the original view",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
