//src/model/mod.rs
pub mod bonds;
pub mod elements;
pub mod library;
pub mod structure;

// Re-exports for cleaner imports
pub use bonds::{bond_threshold, infer_bonds, Bond};
pub use elements::element_style;
pub use structure::{Atom, Molecule};
