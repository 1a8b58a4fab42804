pub mod count;
pub mod equilibrium;
pub mod full_count;

pub use count::{Count, Grid};
pub use equilibrium::{equilibrium_mix, value_pass};
pub use full_count::{q_of_p, reach_pass, Evaluation};
