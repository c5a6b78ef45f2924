// src/rendering/primitives.rs

use super::scene::{RenderAtom, RenderBond};
use cairo::{Context, LinearGradient, RadialGradient};
use std::cmp::Ordering;
use std::f64::consts::PI;

pub type Rgb = (f64, f64, f64);

pub enum RenderPrimitive<'a> {
    Atom(&'a RenderAtom),
    Bond(&'a RenderBond),
}

impl<'a> RenderPrimitive<'a> {
    /// Distance from the camera; larger is farther.
    pub fn z_depth(&self) -> f64 {
        match self {
            RenderPrimitive::Atom(atom) => atom.screen_pos[2],
            RenderPrimitive::Bond(bond) => (bond.start[2] + bond.end[2]) / 2.0,
        }
    }
}

/// Merges atoms and bonds into one far-to-near list for the painter's algorithm.
pub fn depth_sorted<'a>(atoms: &'a [RenderAtom], bonds: &'a [RenderBond]) -> Vec<RenderPrimitive<'a>> {
    let mut prims: Vec<RenderPrimitive<'a>> = bonds
        .iter()
        .map(RenderPrimitive::Bond)
        .chain(atoms.iter().map(RenderPrimitive::Atom))
        .collect();

    // Stable sort: at equal depth bonds stay under atoms
    prims.sort_by(|a, b| b.z_depth().partial_cmp(&a.z_depth()).unwrap_or(Ordering::Equal));
    prims
}

fn lighten(c: f64, amount: f64) -> f64 {
    (c + amount).min(1.0)
}

/// Phong-looking sphere: white highlight up-left, darker rim.
pub fn draw_atom(cr: &Context, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), cairo::Error> {
    if radius <= 0.0 {
        return Ok(());
    }
    let (r, g, b) = color;

    let gradient = RadialGradient::new(
        x - radius * 0.3,
        y - radius * 0.3,
        radius * 0.1,
        x,
        y,
        radius,
    );
    gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    gradient.add_color_stop_rgb(0.2, lighten(r, 0.2), lighten(g, 0.2), lighten(b, 0.2));
    gradient.add_color_stop_rgb(1.0, r * 0.5, g * 0.5, b * 0.5);

    cr.set_source(&gradient)?;
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    // Thin outline keeps white hydrogens visible on light backgrounds
    cr.set_source_rgba(0.0, 0.0, 0.0, 0.25);
    cr.set_line_width((radius * 0.04).max(0.5));
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.stroke()
}

/// Shaded quad standing in for a cylinder between two projected points.
pub fn draw_bond(cr: &Context, bond: &RenderBond, color: Rgb) -> Result<(), cairo::Error> {
    let p1 = bond.start;
    let p2 = bond.end;
    let radius = bond.radius;

    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    let len_sq = dx * dx + dy * dy;
    if len_sq < 0.0001 || radius <= 0.0 {
        return Ok(());
    }

    let nx = -dy / len_sq.sqrt();
    let ny = dx / len_sq.sqrt();

    let c1 = (p1[0] + nx * radius, p1[1] + ny * radius);
    let c2 = (p2[0] + nx * radius, p2[1] + ny * radius);
    let c3 = (p2[0] - nx * radius, p2[1] - ny * radius);
    let c4 = (p1[0] - nx * radius, p1[1] - ny * radius);

    let (r, g, b) = color;
    let gradient = LinearGradient::new(c1.0, c1.1, c4.0, c4.1);
    gradient.add_color_stop_rgb(0.0, r * 0.4, g * 0.4, b * 0.4);
    gradient.add_color_stop_rgb(0.35, r, g, b);
    gradient.add_color_stop_rgb(0.5, lighten(r, 0.15), lighten(g, 0.15), lighten(b, 0.15));
    gradient.add_color_stop_rgb(0.65, r, g, b);
    gradient.add_color_stop_rgb(1.0, r * 0.4, g * 0.4, b * 0.4);

    cr.set_source(&gradient)?;
    cr.move_to(c1.0, c1.1);
    cr.line_to(c2.0, c2.1);
    cr.line_to(c3.0, c3.1);
    cr.line_to(c4.0, c4.1);
    cr.close_path();
    cr.fill()
}
