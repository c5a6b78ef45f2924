// src/rendering/painter.rs

use super::primitives::{depth_sorted, draw_atom, draw_bond, RenderPrimitive, Rgb};
use super::scene::calculate_scene;
use crate::model::element_style;
use crate::state::AppState;
use cairo::{Context, FontSlant, FontWeight};

/// Colour for an element, honouring user overrides from the config.
pub fn atom_color(state: &AppState, element: &str) -> Rgb {
    state
        .config
        .style
        .element_colors
        .get(element)
        .copied()
        .unwrap_or_else(|| element_style(element).1)
}

/// Full frame: background, then bonds and atoms far to near.
pub fn draw_molecule(cr: &Context, state: &AppState, width: f64, height: f64) -> Result<(), cairo::Error> {
    let (bg_r, bg_g, bg_b) = state.config.style.background_color;
    cr.set_source_rgb(bg_r, bg_g, bg_b);
    cr.paint()?;

    let (atoms, bonds) = calculate_scene(state, width, height);
    let bond_color = state.config.style.bond_color;

    for prim in depth_sorted(&atoms, &bonds) {
        match prim {
            RenderPrimitive::Bond(bond) => draw_bond(cr, bond, bond_color)?,
            RenderPrimitive::Atom(atom) => draw_atom(
                cr,
                atom.screen_pos[0],
                atom.screen_pos[1],
                atom.radius,
                atom_color(state, &atom.element),
            )?,
        }
    }
    Ok(())
}

/// Formula in the top-left corner, active step caption along the bottom.
pub fn draw_overlay(cr: &Context, state: &AppState, _width: f64, height: f64) -> Result<(), cairo::Error> {
    let (bg_r, bg_g, bg_b) = state.config.style.background_color;
    // Dark text on light backgrounds and vice versa
    let luminance = 0.299 * bg_r + 0.587 * bg_g + 0.114 * bg_b;
    let ink = if luminance > 0.5 { 0.15 } else { 0.9 };

    cr.save()?;
    cr.set_source_rgb(ink, ink, ink);

    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
    cr.set_font_size(18.0);
    cr.move_to(14.0, 28.0);
    cr.show_text(&state.molecule.formula)?;

    let clock = state.animator.clock();
    let mut caption = format!(
        "{}: {} [{}]",
        clock.label(),
        state.animator.current_label(),
        state.animator.current_kind()
    );
    if clock.is_paused() {
        caption.push_str(" (paused)");
    }
    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size(13.0);
    cr.move_to(14.0, height - 14.0);
    cr.show_text(&caption)?;

    cr.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_color_override() {
        let mut cfg = Config::default();
        cfg.style.element_colors.insert("O".into(), (0.0, 0.5, 0.0));
        let st = AppState::with_config(cfg);
        assert_eq!(atom_color(&st, "O"), (0.0, 0.5, 0.0));
        assert_eq!(atom_color(&st, "H"), (1.0, 1.0, 1.0));
    }
}
