pub mod assignment;
pub mod submission;
pub mod token;
