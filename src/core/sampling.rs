use crate::core::kinematics::{LaunchParams, position_at, time_of_flight};

/// Discretized flight path: parallel, equal-length sequences sampled once at
/// startup and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    pub times_s: Vec<f64>,
    pub xs_m: Vec<f64>,
    pub ys_m: Vec<f64>,
    pub range_m: f64,
    pub max_height_m: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }
}

/// Samples the closed-form arc at `t_i = i * dt` for every `t_i` strictly
/// below the time of flight, so the sequence length is `ceil(t_max / dt)`.
///
/// Degenerate but finite parameters (zero speed, angle outside (0, 90)) are
/// not errors; they yield an empty or near-empty trajectory. The last sample
/// may land slightly above or below ground level, which is accepted
/// fixed-step imprecision and left uncorrected.
pub fn sample_trajectory(params: LaunchParams) -> Result<Trajectory, String> {
    if !params.gravity_mps2.is_finite()
        || !params.speed_mps.is_finite()
        || !params.angle_deg.is_finite()
        || !params.time_step_s.is_finite()
    {
        return Err("Launch parameters must be finite numbers.".to_string());
    }
    if params.gravity_mps2 <= 0.0 {
        return Err(format!(
            "Gravity must be positive, got {} m/s^2.",
            params.gravity_mps2
        ));
    }
    if params.time_step_s <= 0.0 {
        return Err(format!(
            "Time step must be positive, got {} s.",
            params.time_step_s
        ));
    }

    let dt = params.time_step_s;
    let sample_count = (time_of_flight(params) / dt).ceil() as usize;

    let mut times_s = Vec::with_capacity(sample_count);
    let mut xs_m = Vec::with_capacity(sample_count);
    let mut ys_m = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f64 * dt;
        let (x, y) = position_at(params, t);
        times_s.push(t);
        xs_m.push(x);
        ys_m.push(y);
    }

    let range_m = xs_m.last().copied().unwrap_or(0.0);
    let max_height_m = ys_m.iter().copied().fold(0.0f64, f64::max);

    Ok(Trajectory {
        times_s,
        xs_m,
        ys_m,
        range_m,
        max_height_m,
    })
}
