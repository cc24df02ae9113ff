const AXIS_HEADROOM_RATIO: f64 = 0.10;
const MIN_AXIS_SPAN_M: f64 = 1.0;

/// Fixed axis limits for the whole animation: 110% of the raw maxima, with a
/// floor of one metre per axis so degenerate trajectories still plot.
pub fn axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let x_span = (raw_max_x * (1.0 + AXIS_HEADROOM_RATIO)).max(MIN_AXIS_SPAN_M);
    let y_span = (raw_max_y * (1.0 + AXIS_HEADROOM_RATIO)).max(MIN_AXIS_SPAN_M);
    (x_span, y_span)
}
