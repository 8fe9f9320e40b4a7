pub mod scan_step;
pub mod filter_step;
pub mod sort_step;
pub mod limit_offset_step;
pub mod project_selection_step;
