//! Themed icon rendering.
//!
//! Drawing is a pure function of (app id, pixel size): theme lookup, then
//! one of three vector-primitive routines over an RGBA canvas. No
//! randomness anywhere, so repeated runs produce identical pixels.

use crate::apps::AppId;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Drawing routine selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Centered plus-sign glyph.
    Counter,
    /// Six-armed snowflake with branch segments.
    Snowflake,
    /// Globe outline with meridian and a marker pin.
    Globe,
}

/// Colors and style parameters for one app's icon.
#[derive(Debug)]
pub struct IconTheme {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    /// Used by styles with a contrasting detail (the globe's marker pin).
    pub accent: Rgba<u8>,
    /// Optional two-stop vertical background gradient (top, bottom).
    pub gradient: Option<[Rgba<u8>; 2]>,
    /// Optional text badge associated with the theme. No current drawing
    /// routine renders text; the counter style draws a plus glyph instead.
    #[allow(dead_code)]
    pub label: Option<&'static str>,
    pub style: IconStyle,
}

static TRIVIT_THEME: IconTheme = IconTheme {
    background: Rgba([74, 144, 226, 255]),
    foreground: WHITE,
    accent: WHITE,
    gradient: None,
    label: Some("+1"),
    style: IconStyle::Counter,
};

static SNOW_THEME: IconTheme = IconTheme {
    background: Rgba([52, 73, 94, 255]),
    foreground: WHITE,
    accent: WHITE,
    gradient: Some([Rgba([41, 128, 185, 255]), Rgba([52, 73, 94, 255])]),
    label: None,
    style: IconStyle::Snowflake,
};

static FOOTPRINT_THEME: IconTheme = IconTheme {
    background: Rgba([46, 204, 113, 255]),
    foreground: WHITE,
    accent: Rgba([231, 76, 60, 255]),
    gradient: None,
    label: None,
    style: IconStyle::Globe,
};

/// Look up the icon theme for an app.
pub fn theme_for(app: AppId) -> &'static IconTheme {
    match app {
        AppId::Trivit => &TRIVIT_THEME,
        AppId::Snow => &SNOW_THEME,
        AppId::Footprint => &FOOTPRINT_THEME,
    }
}

/// Render a square icon of exactly `size` pixels for the app's theme.
pub fn render_icon(app: AppId, size: u32) -> RgbaImage {
    let theme = theme_for(app);
    let mut img = fill_background(size, theme);

    match theme.style {
        IconStyle::Counter => draw_counter(&mut img, theme),
        IconStyle::Snowflake => draw_snowflake(&mut img, theme),
        IconStyle::Globe => draw_globe(&mut img, theme),
    }

    img
}

fn fill_background(size: u32, theme: &IconTheme) -> RgbaImage {
    match theme.gradient {
        Some([top, bottom]) => {
            let mut img = RgbaImage::new(size, size);
            let span = size.saturating_sub(1).max(1) as f32;
            for y in 0..size {
                let t = y as f32 / span;
                let row_color = Rgba([
                    lerp(top[0], bottom[0], t),
                    lerp(top[1], bottom[1], t),
                    lerp(top[2], bottom[2], t),
                    255,
                ]);
                for x in 0..size {
                    img.put_pixel(x, y, row_color);
                }
            }
            img
        }
        None => RgbaImage::from_pixel(size, size, theme.background),
    }
}

/// Plus-sign glyph: two centered perpendicular bars.
fn draw_counter(img: &mut RgbaImage, theme: &IconTheme) {
    let size = img.width() as i32;
    let center = size / 2;
    let bar_length = size / 3;
    let bar_width = (size / 15).max(2);

    // Vertical bar
    fill_rect(
        img,
        center - bar_width / 2,
        center - bar_length / 2,
        center + bar_width / 2,
        center + bar_length / 2,
        theme.foreground,
    );

    // Horizontal bar
    fill_rect(
        img,
        center - bar_length / 2,
        center - bar_width / 2,
        center + bar_length / 2,
        center + bar_width / 2,
        theme.foreground,
    );
}

/// Six radiating segments at 60° steps, each with two ±30° branches rooted
/// at 60% of the arm length.
fn draw_snowflake(img: &mut RgbaImage, theme: &IconTheme) {
    let size = img.width() as i32;
    let center = size / 2;
    let radius = size / 3;
    let arm_width = (size / 20).max(2);
    let branch_length = radius / 3;
    let branch_width = (arm_width / 2).max(1);

    for angle in (0..360).step_by(60) {
        let rad = (angle as f32).to_radians();
        let arm_end_x = center + (radius as f32 * rad.cos()) as i32;
        let arm_end_y = center + (radius as f32 * rad.sin()) as i32;
        draw_segment(
            img,
            center,
            center,
            arm_end_x,
            arm_end_y,
            arm_width,
            theme.foreground,
        );

        // Branches root partway along the arm.
        let root_x = center + (radius as f32 * 0.6 * rad.cos()) as i32;
        let root_y = center + (radius as f32 * 0.6 * rad.sin()) as i32;
        for branch_angle in [30.0f32, -30.0] {
            let branch_rad = (angle as f32 + branch_angle).to_radians();
            let branch_end_x = root_x + (branch_length as f32 * branch_rad.cos()) as i32;
            let branch_end_y = root_y + (branch_length as f32 * branch_rad.sin()) as i32;
            draw_segment(
                img,
                root_x,
                root_y,
                branch_end_x,
                branch_end_y,
                branch_width,
                theme.foreground,
            );
        }
    }
}

/// Circle outline, equator, meridian ellipse, and an accent marker pin.
fn draw_globe(img: &mut RgbaImage, theme: &IconTheme) {
    let size = img.width() as i32;
    let center = size / 2;
    let radius = size / 3;
    let line_width = (size / 25).max(2);

    draw_ellipse_outline(img, center, center, radius, radius, line_width, theme.foreground);

    // Equator
    draw_segment(
        img,
        center - radius,
        center,
        center + radius,
        center,
        line_width,
        theme.foreground,
    );

    // Meridian
    draw_ellipse_outline(
        img,
        center,
        center,
        radius / 2,
        radius,
        line_width,
        theme.foreground,
    );

    // Marker pin at the upper right
    let pin_x = center + radius / 2;
    let pin_y = center - radius / 2;
    let pin_radius = size / 10;
    fill_disc(img, pin_x, pin_y, pin_radius, theme.accent);
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Fill an inclusive rectangle, clamped to the canvas.
fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    for y in y0.max(0)..=y1.min(h - 1) {
        for x in x0.max(0)..=x1.min(w - 1) {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Fill a disc, clamped to the canvas. A zero radius stamps one pixel.
fn fill_disc(img: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let r_sq = radius * radius;
    for y in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r_sq {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draw a thick line segment by stamping discs along its length.
fn draw_segment(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba<u8>,
) {
    let radius = width / 2;
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = x0 + ((x1 - x0) as f32 * t).round() as i32;
        let y = y0 + ((y1 - y0) as f32 * t).round() as i32;
        fill_disc(img, x, y, radius, color);
    }
}

/// Draw an ellipse outline by stamping discs along its parameterization.
fn draw_ellipse_outline(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    width: i32,
    color: Rgba<u8>,
) {
    let radius = width / 2;
    // Step count proportional to the perimeter keeps the outline gapless
    // at every catalog size.
    let steps = (rx.max(ry) * 8).max(16);
    for i in 0..steps {
        let theta = std::f32::consts::TAU * i as f32 / steps as f32;
        let x = cx + (rx as f32 * theta.cos()).round() as i32;
        let y = cy + (ry as f32 * theta.sin()).round() as i32;
        fill_disc(img, x, y, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::ICON_CATALOG;

    #[test]
    fn renders_square_images_at_every_catalog_size() {
        for slot in &ICON_CATALOG {
            let px = slot.pixel_size();
            for app in [AppId::Trivit, AppId::Snow, AppId::Footprint] {
                let img = render_icon(app, px);
                assert_eq!(img.width(), px);
                assert_eq!(img.height(), px);
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for app in [AppId::Trivit, AppId::Snow, AppId::Footprint] {
            let first = render_icon(app, 120);
            let second = render_icon(app, 120);
            assert_eq!(first.as_raw(), second.as_raw());
        }
    }

    #[test]
    fn counter_draws_foreground_at_center() {
        let img = render_icon(AppId::Trivit, 120);
        let theme = theme_for(AppId::Trivit);
        assert_eq!(*img.get_pixel(60, 60), theme.foreground);
        // Corners stay background.
        assert_eq!(*img.get_pixel(0, 0), theme.background);
        assert_eq!(*img.get_pixel(119, 119), theme.background);
    }

    #[test]
    fn counter_bars_span_a_third_of_the_canvas() {
        let img = render_icon(AppId::Trivit, 120);
        let theme = theme_for(AppId::Trivit);
        // bar_length = 40, so the horizontal bar reaches x = 60 ± 20.
        assert_eq!(*img.get_pixel(41, 60), theme.foreground);
        assert_eq!(*img.get_pixel(79, 60), theme.foreground);
        assert_eq!(*img.get_pixel(30, 60), theme.background);
    }

    #[test]
    fn snowflake_background_uses_gradient_stops() {
        let img = render_icon(AppId::Snow, 128);
        let [top, bottom] = theme_for(AppId::Snow).gradient.unwrap();
        assert_eq!(*img.get_pixel(0, 0), top);
        assert_eq!(*img.get_pixel(0, 127), bottom);
    }

    #[test]
    fn snowflake_draws_arms_from_center() {
        let img = render_icon(AppId::Snow, 120);
        let theme = theme_for(AppId::Snow);
        // The 0° arm runs right from the center to x = 60 + 40.
        assert_eq!(*img.get_pixel(60, 60), theme.foreground);
        assert_eq!(*img.get_pixel(99, 60), theme.foreground);
    }

    #[test]
    fn globe_draws_marker_pin_in_accent_color() {
        let img = render_icon(AppId::Footprint, 120);
        let theme = theme_for(AppId::Footprint);
        // Pin center: (60 + 20, 60 - 20).
        assert_eq!(*img.get_pixel(80, 40), theme.accent);
        // Equator midpoint-left is foreground.
        assert_eq!(*img.get_pixel(25, 60), theme.foreground);
    }

    #[test]
    fn stroke_widths_stay_visible_at_smallest_size() {
        // 20px is the smallest catalog size; arms and outlines must
        // still land pixels.
        for app in [AppId::Trivit, AppId::Snow, AppId::Footprint] {
            let img = render_icon(app, 20);
            let theme = theme_for(app);
            let foreground_pixels = img
                .pixels()
                .filter(|&&p| p == theme.foreground)
                .count();
            assert!(
                foreground_pixels > 0,
                "{:?} icon lost its glyph at 20px",
                theme.style
            );
        }
    }
}
