/// Returns (sphere_radius, (r, g, b)) used for ball-and-stick drawing.
/// The table is deliberately small; every other symbol gets the default.
pub fn element_style(element: &str) -> (f64, (f64, f64, f64)) {
    match element {
        "H"  => (0.4, (1.00, 1.00, 1.00)), // White
        "O"  => (0.8, (1.00, 0.00, 0.00)), // Red
        "C"  => (0.7, (0.20, 0.20, 0.20)), // Dark Grey
        "N"  => (0.7, (0.00, 0.00, 1.00)), // Blue
        "Cl" => (0.9, (0.00, 1.00, 0.00)), // Green
        "F"  => (0.6, (0.00, 1.00, 1.00)), // Cyan
        "Na" => (0.9, (0.00, 0.00, 1.00)), // Blue
        "Mg" => (0.9, (0.00, 1.00, 0.00)), // Green
        "P"  => (0.8, (1.00, 0.50, 0.00)), // Orange
        "S"  => (0.8, (1.00, 1.00, 0.00)), // Yellow
        _    => (0.6, (1.00, 1.00, 0.00)), // Yellow
    }
}

/// Converts a 0xRRGGBB literal into cairo's unit-range triple.
pub fn rgb_from_hex(hex: u32) -> (f64, f64, f64) {
    let r = ((hex >> 16) & 0xFF) as f64 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f64 / 255.0;
    let b = (hex & 0xFF) as f64 / 255.0;
    (r, g, b)
}
