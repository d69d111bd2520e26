pub mod ground_roll;
pub mod obstacle;
pub mod sizing;

pub use ground_roll::{closed_form_distance, simplified_distance};
pub use obstacle::obstacle_clearance_distance;
pub use sizing::required_thrust;
