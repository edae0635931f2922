use raylib::prelude::*;

use crate::layout::Layout;
use crate::transition::Direction;
use crate::view::Frame;

const STAGE_BG: Color = Color::BLACK;
const ARROW_IDLE: Color = Color { r: 255, g: 255, b: 255, a: 140 };
const ARROW_HOVERED: Color = Color { r: 255, g: 255, b: 255, a: 235 };
const ARROW_BACKDROP: Color = Color { r: 0, g: 0, b: 0, a: 60 };
const ARROW_BACKDROP_HOVERED: Color = Color { r: 0, g: 0, b: 0, a: 110 };
const DOT_SELECTED: Color = Color::SKYBLUE;
const DOT_IDLE: Color = Color::GRAY;
const CAPTION_COLOR: Color = Color::LIGHTGRAY;
const STATUS_COLOR: Color = Color::GRAY;
const FOCUS_RING: Color = Color { r: 102, g: 178, b: 255, a: 200 };
const SKIP_LINK_BG: Color = Color { r: 20, g: 40, b: 80, a: 240 };

/// Paints one projected frame. Pure consumer: everything it shows comes
/// out of the `Frame`, the `Layout` and the texture table.
pub fn render(d: &mut RaylibDrawHandle, frame: &Frame, layout: &Layout, textures: &[Texture2D]) {
    d.clear_background(STAGE_BG);

    let active = frame
        .slides
        .iter()
        .find(|s| s.visible)
        .map(|s| s.index)
        .unwrap_or(0);

    // --- Stage ---
    match frame.motion {
        Some(motion) => {
            let sign = match motion.direction {
                Direction::Forward => 1.0,
                Direction::Backward => -1.0,
            };
            let width = layout.stage.width;
            let outgoing_x = raylib::core::math::lerp(0.0, -sign * width, motion.progress);
            let incoming_x = raylib::core::math::lerp(sign * width, 0.0, motion.progress);

            // Clip the sliding strip to the stage.
            let mut sd = d.begin_scissor_mode(
                layout.stage.x as i32,
                layout.stage.y as i32,
                layout.stage.width as i32,
                layout.stage.height as i32,
            );
            if let Some(texture) = textures.get(motion.from) {
                draw_slide_fitted(&mut sd, texture, &layout.stage, outgoing_x);
            }
            if let Some(texture) = textures.get(active) {
                draw_slide_fitted(&mut sd, texture, &layout.stage, incoming_x);
            }
        }
        None => {
            if let Some(texture) = textures.get(active) {
                draw_slide_fitted(d, texture, &layout.stage, 0.0);
            }
        }
    }

    // A slide without a texture still announces itself: alt text when the
    // record has it, the position label otherwise.
    if textures.get(active).is_none() {
        if let Some(slide) = frame.slides.get(active) {
            let fallback = slide.alt.as_deref().unwrap_or(&slide.label);
            let size = 24;
            let text_width = raylib::core::text::measure_text(fallback, size);
            d.draw_text(
                fallback,
                (layout.stage.x + (layout.stage.width - text_width as f32) / 2.0) as i32,
                (layout.stage.y + layout.stage.height / 2.0 - size as f32 / 2.0) as i32,
                size,
                CAPTION_COLOR,
            );
        }
    }

    // --- Directional controls ---
    draw_arrow(d, &layout.left_arrow, "<", frame.left_arrow.label, frame.left_arrow.hovered);
    draw_arrow(d, &layout.right_arrow, ">", frame.right_arrow.label, frame.right_arrow.hovered);

    // --- Region heading, caption & status ---
    d.draw_text(frame.region_label, 12, 12, 18, STATUS_COLOR);

    if let Some(caption) = &frame.caption {
        let size = 20;
        let text_width = raylib::core::text::measure_text(caption, size);
        d.draw_text(
            caption,
            (layout.caption.x + (layout.caption.width - text_width as f32) / 2.0) as i32,
            (layout.caption.y + (layout.caption.height - size as f32) / 2.0) as i32,
            size,
            CAPTION_COLOR,
        );
    }
    if let Some(link) = &frame.link {
        let size = 14;
        let text_width = raylib::core::text::measure_text(link, size);
        d.draw_text(
            link,
            (layout.caption.x + layout.caption.width - text_width as f32 - 12.0) as i32,
            (layout.caption.y + layout.caption.height - size as f32 - 4.0) as i32,
            size,
            STATUS_COLOR,
        );
    }
    let status_size = 18;
    let status_width = raylib::core::text::measure_text(&frame.status, status_size);
    d.draw_text(
        &frame.status,
        (layout.stage.width - status_width as f32 - 12.0) as i32,
        12,
        status_size,
        STATUS_COLOR,
    );

    // --- Pagination dots ---
    for tab in &frame.tabs {
        if let Some(zone) = layout.dots.get(tab.controls) {
            let center = Vector2::new(zone.x + zone.width / 2.0, zone.y + zone.height / 2.0);
            if tab.selected {
                d.draw_circle_v(center, crate::constants::DOT_RADIUS + 2.0, DOT_SELECTED);
            } else {
                d.draw_circle_v(center, crate::constants::DOT_RADIUS, DOT_IDLE);
            }
        }
    }

    // --- Focus ring ---
    if frame.carousel_focused {
        d.draw_rectangle_lines_ex(layout.stage, 2.0, FOCUS_RING);
    }

    // --- Skip link banner (only present while focused) ---
    if let Some(skip) = &frame.skip_link {
        d.draw_rectangle_rec(layout.skip_link, SKIP_LINK_BG);
        d.draw_text(
            &skip.label,
            12,
            (layout.skip_link.height / 2.0 - 9.0) as i32,
            18,
            Color::WHITE,
        );
    }
}

/// Fits a texture inside the stage, preserving aspect ratio and centering,
/// shifted horizontally by `offset_x` while a slide change animates.
fn draw_slide_fitted<D: RaylibDraw>(
    d: &mut D,
    texture: &Texture2D,
    stage: &Rectangle,
    offset_x: f32,
) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return;
    }

    let scale = (stage.width / tex_width).min(stage.height / tex_height);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    let dest = Rectangle::new(
        stage.x + offset_x + (stage.width - scaled_width) / 2.0,
        stage.y + (stage.height - scaled_height) / 2.0,
        scaled_width,
        scaled_height,
    );

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_arrow(d: &mut RaylibDrawHandle, zone: &Rectangle, glyph: &str, label: &str, hovered: bool) {
    let backdrop = if hovered { ARROW_BACKDROP_HOVERED } else { ARROW_BACKDROP };
    d.draw_rectangle_rec(*zone, backdrop);

    let size = 40;
    let glyph_width = raylib::core::text::measure_text(glyph, size);
    let color = if hovered { ARROW_HOVERED } else { ARROW_IDLE };
    d.draw_text(
        glyph,
        (zone.x + (zone.width - glyph_width as f32) / 2.0) as i32,
        (zone.y + (zone.height - size as f32) / 2.0) as i32,
        size,
        color,
    );

    // Name the control while the pointer is over it.
    if hovered {
        d.draw_text(
            label,
            (zone.x + 4.0) as i32,
            (zone.y + zone.height - 22.0) as i32,
            14,
            ARROW_HOVERED,
        );
    }
}
