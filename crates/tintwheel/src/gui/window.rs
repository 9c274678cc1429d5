use gtk::prelude::*;
use gtk4 as gtk;
use huewheel::{CursorStyle, SurfaceBox};

pub fn centered_box(width: f64, height: f64, side: f64) -> SurfaceBox {
    SurfaceBox::new(
        ((width - side) / 2.0).max(0.0).floor(),
        ((height - side) / 2.0).max(0.0).floor(),
    )
}

pub fn surface_box(area: &gtk::DrawingArea, side: f64) -> SurfaceBox {
    centered_box(area.width() as f64, area.height() as f64, side)
}

pub fn apply_cursor(area: &gtk::DrawingArea, cursor: CursorStyle) {
    area.set_cursor_from_name(Some(cursor.to_string().as_str()));
}

pub fn fit_to_wheel(area: &gtk::DrawingArea, side: f64) {
    let px = side.ceil() as i32;
    area.set_content_width(px);
    area.set_content_height(px);
}
