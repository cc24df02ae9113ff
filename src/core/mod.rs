pub mod kinematics;
pub mod sampling;
pub mod window;
