mod application;
mod common;
mod model;
