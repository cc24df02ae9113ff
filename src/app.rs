use macroquad::prelude::*;

use projectile_motion::core::kinematics::{LaunchParams, time_of_flight};
use projectile_motion::core::sampling::sample_trajectory;
use projectile_motion::core::window::axis_window;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRAVITY_MPS2, GRID_COLOR, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, LAUNCH_ANGLE_DEG, LAUNCH_SPEED_MPS, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TIME_STEP_S, TOP_MARGIN,
};
use crate::hud::draw_hud;
use crate::playback::Playback;
use crate::render::{draw_axis_tick_labels, draw_grid, draw_trajectory_prefix};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Animation".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn launch_params() -> LaunchParams {
    LaunchParams {
        gravity_mps2: GRAVITY_MPS2,
        speed_mps: LAUNCH_SPEED_MPS,
        angle_deg: LAUNCH_ANGLE_DEG,
        time_step_s: TIME_STEP_S,
    }
}

pub(crate) async fn run() {
    let params = launch_params();
    let trajectory = match sample_trajectory(params) {
        Ok(trajectory) => trajectory,
        Err(err) => {
            log::error!("Could not sample trajectory: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Sampled {} points over {:.3} s of flight: range {:.2} m, max height {:.2} m",
        trajectory.len(),
        time_of_flight(params),
        trajectory.range_m,
        trajectory.max_height_m
    );

    // Axis limits are computed once and stay fixed for the whole playback.
    let (axis_max_x, axis_max_y) = axis_window(trajectory.range_m, trajectory.max_height_m);
    let mut playback = Playback::new(trajectory.len(), params.time_step_s);

    loop {
        playback.advance(get_frame_time() as f64);

        let screen_w = screen_width();
        let screen_h = screen_height();
        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        clear_background(BACKGROUND);
        draw_grid(left, right, top, bottom, GRID_COLOR);
        draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
        draw_line(left, top, left, bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(left, right, top, bottom, axis_max_x, axis_max_y);
        draw_trajectory_prefix(
            &trajectory,
            playback.revealed(),
            axis_max_x,
            axis_max_y,
            left,
            right,
            top,
            bottom,
        );
        draw_hud(
            params,
            &trajectory,
            playback.revealed(),
            playback.is_done(),
            left,
            right,
            top,
            screen_w,
            screen_h,
        );

        next_frame().await;
    }
}
