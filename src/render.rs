use macroquad::prelude::*;

use projectile_motion::core::sampling::Trajectory;

use crate::constants::{
    MARKER_RADIUS, PATH_COLOR, PATH_THICKNESS, X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn world_to_screen(
    x_m: f64,
    y_m: f64,
    axis_max_x: f64,
    axis_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> Vec2 {
    let plot_w = (right - left).max(1.0);
    let plot_h = (bottom - top).max(1.0);
    let x = left + ((x_m / axis_max_x.max(1.0)) as f32) * plot_w;
    let y = bottom - ((y_m / axis_max_y.max(1.0)) as f32) * plot_h;
    vec2(x, y)
}

pub(crate) fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    axis_max_x: f64,
    axis_max_y: f64,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = t as f64 * axis_max_x;
        let label = format_axis_value(value, axis_max_x);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            label_color,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = t as f64 * axis_max_y;
        let label = format_axis_value(value, axis_max_y);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
        );
    }

    draw_ui_text(
        "Horizontal Distance (m)",
        right - 200.0,
        bottom + 48.0,
        18,
        label_color,
    );
    draw_ui_text("Vertical Distance (m)", left + 10.0, top - 10.0, 18, label_color);
}

/// Draws the first `revealed` samples as a polyline with a marker on the
/// newest one. Fewer than two revealed points draw the marker alone.
pub(crate) fn draw_trajectory_prefix(
    trajectory: &Trajectory,
    revealed: usize,
    axis_max_x: f64,
    axis_max_y: f64,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) {
    if revealed == 0 {
        return;
    }

    let mut prev = world_to_screen(
        trajectory.xs_m[0],
        trajectory.ys_m[0],
        axis_max_x,
        axis_max_y,
        left,
        right,
        top,
        bottom,
    );
    for i in 1..revealed {
        let cur = world_to_screen(
            trajectory.xs_m[i],
            trajectory.ys_m[i],
            axis_max_x,
            axis_max_y,
            left,
            right,
            top,
            bottom,
        );
        draw_line(prev.x, prev.y, cur.x, cur.y, PATH_THICKNESS, PATH_COLOR);
        prev = cur;
    }

    draw_circle(prev.x, prev.y, MARKER_RADIUS, PATH_COLOR);
    draw_circle_lines(prev.x, prev.y, MARKER_RADIUS, 2.0, DARKBLUE);
}
