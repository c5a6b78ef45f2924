use super::painter;
use crate::state::AppState;

/// Renders the current animation frame offscreen and writes it as PNG.
pub fn export_png(state: &AppState, path: &str, width: i32, height: i32) -> Result<(), String> {
    if width <= 0 || height <= 0 {
        return Err(format!("Invalid image size {}x{}", width, height));
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .map_err(|e| e.to_string())?;
    let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;

    painter::draw_molecule(&cr, state, width as f64, height as f64).map_err(|e| e.to_string())?;
    painter::draw_overlay(&cr, state, width as f64, height as f64).map_err(|e| e.to_string())?;
    drop(cr);

    let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
    surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    log::info!("Exported frame to {}", path);
    Ok(())
}
