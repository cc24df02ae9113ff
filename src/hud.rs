use macroquad::prelude::*;

use projectile_motion::core::kinematics::LaunchParams;
use projectile_motion::core::sampling::Trajectory;

use crate::constants::{HEIGHT_TEXT_COLOR, RANGE_TEXT_COLOR, TITLE_Y};
use crate::render::draw_ui_text;

pub(crate) fn draw_hud(
    params: LaunchParams,
    trajectory: &Trajectory,
    revealed: usize,
    done: bool,
    left: f32,
    right: f32,
    top: f32,
    screen_w: f32,
    screen_h: f32,
) {
    draw_title(screen_w);
    draw_live_labels(trajectory, revealed, left, right, top);
    draw_status_line(params, trajectory, revealed, done, left, screen_h);
}

fn draw_title(screen_w: f32) {
    let title = "Projectile Motion Animation";
    let title_size: u16 = 32;
    let measure = measure_text(title, None, title_size, 1.0);
    draw_ui_text(
        title,
        (screen_w - measure.width) * 0.5,
        TITLE_Y,
        title_size,
        Color::from_rgba(30, 30, 35, 255),
    );
}

/// The two overlays deliberately read the newest revealed sample, not the
/// completed flight, so "Range" and "Max Height" tick upward while the shot
/// is in the air and settle on the final sample when playback ends.
fn draw_live_labels(trajectory: &Trajectory, revealed: usize, left: f32, right: f32, top: f32) {
    if trajectory.is_empty() {
        return;
    }

    let idx = revealed.min(trajectory.len() - 1);
    let label_x = left + (right - left) * 0.72;

    draw_ui_text(
        &format!("Range: {:.2} m", trajectory.xs_m[idx]),
        label_x,
        top + 26.0,
        20,
        RANGE_TEXT_COLOR,
    );
    draw_ui_text(
        &format!("Max Height: {:.2} m", trajectory.ys_m[idx]),
        label_x,
        top + 52.0,
        20,
        HEIGHT_TEXT_COLOR,
    );
}

fn draw_status_line(
    params: LaunchParams,
    trajectory: &Trajectory,
    revealed: usize,
    done: bool,
    left: f32,
    screen_h: f32,
) {
    let elapsed_s = revealed as f64 * params.time_step_s;
    let state = if trajectory.is_empty() {
        "Nothing to animate"
    } else if done {
        "Complete"
    } else {
        "Playing"
    };

    draw_ui_text(
        &format!(
            "Angle: {:.1} deg | Velocity: {:.1} m/s | g: {:.2} m/s^2 | dt: {:.3} s",
            params.angle_deg, params.speed_mps, params.gravity_mps2, params.time_step_s
        ),
        left,
        screen_h - 38.0,
        20,
        Color::from_rgba(30, 30, 35, 255),
    );
    draw_ui_text(
        &format!(
            "t = {:.2} s | {}/{} samples | {}",
            elapsed_s,
            revealed,
            trajectory.len(),
            state
        ),
        left,
        screen_h - 12.0,
        18,
        DARKGRAY,
    );
}
