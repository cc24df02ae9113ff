use proptest::prelude::*;

use projectile_motion::core::kinematics::{LaunchParams, time_of_flight};
use projectile_motion::core::sampling::sample_trajectory;

fn valid_params() -> impl Strategy<Value = LaunchParams> {
    (1.0f64..30.0, 0.5f64..60.0, 1.0f64..89.0, 0.001f64..0.1).prop_map(
        |(gravity_mps2, speed_mps, angle_deg, time_step_s)| LaunchParams {
            gravity_mps2,
            speed_mps,
            angle_deg,
            time_step_s,
        },
    )
}

proptest! {
    #[test]
    fn times_strictly_increase_from_zero(params in valid_params()) {
        let trajectory = sample_trajectory(params).unwrap();

        prop_assert!(!trajectory.is_empty());
        prop_assert_eq!(trajectory.times_s[0], 0.0);
        for pair in trajectory.times_s.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }

        let expected_len = (time_of_flight(params) / params.time_step_s).ceil() as usize;
        prop_assert_eq!(trajectory.len(), expected_len);
    }

    #[test]
    fn sequences_stay_parallel(params in valid_params()) {
        let trajectory = sample_trajectory(params).unwrap();

        prop_assert_eq!(trajectory.xs_m.len(), trajectory.times_s.len());
        prop_assert_eq!(trajectory.ys_m.len(), trajectory.times_s.len());
    }

    #[test]
    fn horizontal_positions_never_decrease(params in valid_params()) {
        let trajectory = sample_trajectory(params).unwrap();

        for pair in trajectory.xs_m.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn resampling_is_deterministic(params in valid_params()) {
        let first = sample_trajectory(params).unwrap();
        let second = sample_trajectory(params).unwrap();

        prop_assert_eq!(first.times_s, second.times_s);
        prop_assert_eq!(first.xs_m, second.xs_m);
        prop_assert_eq!(first.ys_m, second.ys_m);
    }
}
