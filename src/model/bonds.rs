// src/model/bonds.rs

use super::structure::Atom;
use crate::utils::geometry::calculate_distance;

#[derive(Clone, Debug, PartialEq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub original_start: [f64; 3],
    pub original_end: [f64; 3],
}

impl Bond {
    /// Endpoints for the current frame. Bonds are rebuilt from the animated
    /// atom positions rather than moved.
    pub fn endpoints(&self, positions: &[[f64; 3]]) -> ([f64; 3], [f64; 3]) {
        match (positions.get(self.a), positions.get(self.b)) {
            (Some(&p1), Some(&p2)) => (p1, p2),
            _ => (self.original_start, self.original_end),
        }
    }
}

/// Maximum bonded distance for an element pair. Hydrogen wins over every
/// other rule.
pub fn bond_threshold(e1: &str, e2: &str) -> f64 {
    match (e1, e2) {
        ("H", _) | (_, "H") => 1.2,
        ("C", "O") | ("O", "C") => 1.5,
        ("C", "N") | ("N", "C") => 1.5,
        ("C", "C") => 1.7,
        _ => 2.0,
    }
}

/// Pairwise distance scan. Returns bonds ordered by (a, b) with a < b.
pub fn infer_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let mut bonds = Vec::new();

    for (i, a1) in atoms.iter().enumerate() {
        for (j, a2) in atoms.iter().enumerate().skip(i + 1) {
            let threshold = bond_threshold(&a1.element, &a2.element);
            let dist = calculate_distance(a1.position, a2.position);

            if dist < threshold {
                bonds.push(Bond {
                    a: i,
                    b: j,
                    original_start: a1.position,
                    original_end: a2.position,
                });
            }
        }
    }

    log::debug!("Inferred {} bonds across {} atoms", bonds.len(), atoms.len());
    bonds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(bond_threshold("H", "O"), 1.2);
        assert_eq!(bond_threshold("Cl", "H"), 1.2);
        assert_eq!(bond_threshold("H", "H"), 1.2);
        assert_eq!(bond_threshold("O", "C"), 1.5);
        assert_eq!(bond_threshold("C", "O"), 1.5);
        assert_eq!(bond_threshold("N", "C"), 1.5);
        assert_eq!(bond_threshold("C", "C"), 1.7);
        assert_eq!(bond_threshold("O", "O"), 2.0);
        assert_eq!(bond_threshold("N", "O"), 2.0);
    }

    #[test]
    fn test_water_bonds_to_both_hydrogens() {
        // H-H are 2.0 apart, above the 1.2 hydrogen cutoff
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [1.0, 0.0, 0.0]),
            Atom::new("H", [-1.0, 0.0, 0.0]),
        ];
        let bonds = infer_bonds(&atoms);
        let pairs: Vec<(usize, usize)> = bonds.iter().map(|b| (b.a, b.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2)]);
        assert_eq!(bonds[1].original_end, [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let atoms = vec![Atom::new("C", [0.0; 3]), Atom::new("C", [1.7, 0.0, 0.0])];
        assert!(infer_bonds(&atoms).is_empty());

        let atoms = vec![Atom::new("C", [0.0; 3]), Atom::new("C", [1.69, 0.0, 0.0])];
        assert_eq!(infer_bonds(&atoms).len(), 1);
    }

    #[test]
    fn test_endpoints_follow_current_positions() {
        let atoms = vec![Atom::new("O", [0.0; 3]), Atom::new("H", [1.0, 0.0, 0.0])];
        let bond = &infer_bonds(&atoms)[0];
        let moved = [[0.0, 0.1, 0.0], [1.0, -0.1, 0.0]];
        assert_eq!(bond.endpoints(&moved), (moved[0], moved[1]));
        // Short slice falls back to the cached originals
        assert_eq!(bond.endpoints(&[]), ([0.0; 3], [1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_empty_and_single_atom() {
        assert!(infer_bonds(&[]).is_empty());
        assert!(infer_bonds(&[Atom::new("C", [0.0; 3])]).is_empty());
    }
}
