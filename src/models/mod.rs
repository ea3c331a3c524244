pub mod diagnosis;
pub mod free_memory;
pub mod thresholds;
pub mod usage;
