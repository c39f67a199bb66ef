pub mod calculation;
pub mod category;
pub mod usage;
