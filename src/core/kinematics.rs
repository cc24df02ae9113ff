pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

/// Launch configuration for a ground-level shot on a flat plane. Passed
/// explicitly into every computation; there is no hidden global state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParams {
    pub gravity_mps2: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub time_step_s: f64,
}

pub fn velocity_components(params: LaunchParams) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx0 = params.speed_mps * theta.cos();
    let vy0 = params.speed_mps * theta.sin();
    (vx0, vy0)
}

/// Time until the projectile returns to launch elevation, `2*vy0/g`.
/// Negative vertical launch components clamp to a zero-length flight.
pub fn time_of_flight(params: LaunchParams) -> f64 {
    let (_, vy0) = velocity_components(params);
    (2.0 * vy0 / params.gravity_mps2).max(0.0)
}

/// Closed-form position at `time_s` seconds after launch.
pub fn position_at(params: LaunchParams, time_s: f64) -> (f64, f64) {
    let (vx0, vy0) = velocity_components(params);
    let x = vx0 * time_s;
    let y = (vy0 * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Apex height of the arc, `vy0^2 / (2g)`.
pub fn peak_height(params: LaunchParams) -> f64 {
    let (_, vy0) = velocity_components(params);
    ((vy0 * vy0) / (2.0 * params.gravity_mps2)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::{LaunchParams, peak_height, position_at, time_of_flight, velocity_components};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn reference_shot() -> LaunchParams {
        LaunchParams {
            gravity_mps2: 9.81,
            speed_mps: 15.0,
            angle_deg: 30.0,
            time_step_s: 0.01,
        }
    }

    #[test]
    fn decomposes_velocity_for_thirty_degrees() {
        let (vx0, vy0) = velocity_components(reference_shot());
        assert_close(vx0, 12.9904, 0.001);
        assert_close(vy0, 7.5, 0.0001);
    }

    #[test]
    fn flight_time_matches_closed_form() {
        assert_close(time_of_flight(reference_shot()), 1.5291, 0.001);
    }

    #[test]
    fn vertical_shot_has_no_horizontal_component() {
        let (vx0, vy0) = velocity_components(LaunchParams {
            angle_deg: 90.0,
            ..reference_shot()
        });
        assert_close(vx0, 0.0, 1e-12);
        assert_close(vy0, 15.0, 1e-9);
    }

    #[test]
    fn apex_matches_closed_form() {
        // vy0^2 / (2g) = 7.5^2 / 19.62
        assert_close(peak_height(reference_shot()), 2.8670, 0.001);
    }

    #[test]
    fn position_starts_at_origin() {
        let (x, y) = position_at(reference_shot(), 0.0);
        assert_close(x, 0.0, 1e-12);
        assert_close(y, 0.0, 1e-12);
    }
}
