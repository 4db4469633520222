pub mod lesson;
pub mod usage;
