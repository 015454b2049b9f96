// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/envelope_reveal.svg");

/// Icon edge length in pixels.
const ICON_SIZE: u32 = 128;

/// Renders the SVG to a square RGBA buffer. `None` if parsing or rendering fails.
fn rasterize(size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_rasterizes() {
        let pixmap = rasterize(ICON_SIZE).expect("icon should render");
        assert_eq!(pixmap.width(), ICON_SIZE);
        assert!(pixmap.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_is_built() {
        assert!(load_window_icon().is_some());
    }
}
