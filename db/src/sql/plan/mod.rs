pub mod plan_step;
pub mod planner;

pub(crate) mod steps;
