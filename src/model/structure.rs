use serde::{Deserialize, Serialize};

use super::elements::element_style;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            element: element.into(),
            position,
        }
    }
}

/// A single molecule as shown in the viewer. Atom coordinates are never
/// modified after loading; animation works on copies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Molecule {
    pub formula: String,
    pub atoms: Vec<Atom>,
    pub description: String,
}

impl Molecule {
    pub fn new(formula: impl Into<String>, atoms: Vec<Atom>, description: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            atoms,
            description: description.into(),
        }
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Axis-aligned box enclosing every atom sphere, as (min, max).
    pub fn bounding_box(&self) -> Option<([f64; 3], [f64; 3])> {
        if self.atoms.is_empty() {
            return None;
        }

        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for atom in &self.atoms {
            let (radius, _) = element_style(&atom.element);
            for k in 0..3 {
                min[k] = min[k].min(atom.position[k] - radius);
                max[k] = max[k].max(atom.position[k] + radius);
            }
        }
        Some((min, max))
    }

    pub fn center(&self) -> [f64; 3] {
        match self.bounding_box() {
            Some((min, max)) => [
                (min[0] + max[0]) * 0.5,
                (min[1] + max[1]) * 0.5,
                (min[2] + max[2]) * 0.5,
            ],
            None => [0.0; 3],
        }
    }

    /// Element counts in first-seen order, e.g. "O1 H2".
    pub fn composition(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for atom in &self.atoms {
            match counts.iter_mut().find(|(el, _)| *el == atom.element) {
                Some((_, n)) => *n += 1,
                None => counts.push((atom.element.clone(), 1)),
            }
        }
        counts
    }
}
