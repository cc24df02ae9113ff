use macroquad::prelude::Color;

use projectile_motion::core::kinematics::EARTH_GRAVITY_MPS2;

// Launch parameters, fixed at compile time. The binary takes no arguments.
pub(crate) const GRAVITY_MPS2: f64 = EARTH_GRAVITY_MPS2;
pub(crate) const LAUNCH_SPEED_MPS: f64 = 15.0;
pub(crate) const LAUNCH_ANGLE_DEG: f64 = 30.0;
pub(crate) const TIME_STEP_S: f64 = 0.01;

pub(crate) const INITIAL_WINDOW_WIDTH: i32 = 960;
pub(crate) const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub(crate) const MSAA_SAMPLES: i32 = 4;

pub(crate) const LEFT_MARGIN: f32 = 90.0;
pub(crate) const RIGHT_MARGIN: f32 = 36.0;
pub(crate) const TOP_MARGIN: f32 = 84.0;
pub(crate) const BOTTOM_MARGIN: f32 = 86.0;

pub(crate) const TITLE_Y: f32 = 44.0;
pub(crate) const X_GRID_LINES: usize = 10;
pub(crate) const Y_GRID_LINES: usize = 8;

pub(crate) const PATH_THICKNESS: f32 = 3.0;
pub(crate) const MARKER_RADIUS: f32 = 6.0;
pub(crate) const MAX_SAMPLES_PER_FRAME: usize = 32;

pub(crate) const BACKGROUND: Color = Color::new(0.980, 0.984, 0.992, 1.0);
pub(crate) const GRID_COLOR: Color = Color::new(0.890, 0.906, 0.925, 1.0);
// matplotlib tab:blue / tab:green / tab:orange.
pub(crate) const PATH_COLOR: Color = Color::new(0.122, 0.467, 0.706, 1.0);
pub(crate) const RANGE_TEXT_COLOR: Color = Color::new(0.173, 0.627, 0.173, 1.0);
pub(crate) const HEIGHT_TEXT_COLOR: Color = Color::new(1.0, 0.498, 0.055, 1.0);
