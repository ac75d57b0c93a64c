/// Resource endpoints interface
pub mod resource;
