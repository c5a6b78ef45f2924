use crate::model::{Atom, Molecule};
use std::fs;
use std::io;

pub fn parse(path: &str, formula: &str) -> io::Result<Molecule> {
    let content = fs::read_to_string(path)?;
    parse_str(&content, formula)
}

pub fn parse_str(content: &str, formula: &str) -> io::Result<Molecule> {
    let mut lines = content.lines();

    // 1. Number of Atoms
    let n_atoms_str = lines
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Empty XYZ file"))?;
    let n_atoms: usize = n_atoms_str
        .trim()
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "Invalid atom count"))?;

    // 2. Comment line doubles as the description
    let comment = lines.next().unwrap_or("").trim().to_string();

    // 3. Atoms
    let mut atoms = Vec::with_capacity(n_atoms);
    for line in lines.take(n_atoms) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }

        let coord = |s: &str, axis: &str| {
            s.parse::<f64>().map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidData, format!("Invalid {} in line: {}", axis, line))
            })
        };
        let x = coord(parts[1], "X")?;
        let y = coord(parts[2], "Y")?;
        let z = coord(parts[3], "Z")?;

        atoms.push(Atom::new(parts[0], [x, y, z]));
    }

    if atoms.len() != n_atoms {
        log::warn!("XYZ header declares {} atoms but {} were read", n_atoms, atoms.len());
    }
    if atoms.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "XYZ file contains no atoms"));
    }

    let description = if comment.is_empty() {
        format!("Molecular structure of {}", formula)
    } else {
        comment
    };

    Ok(Molecule::new(formula, atoms, description))
}
