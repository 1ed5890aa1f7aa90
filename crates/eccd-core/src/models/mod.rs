pub mod evaluation;
pub mod request;
pub mod student;
