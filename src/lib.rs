pub mod cli;
pub mod cloud;
pub mod executor;
pub mod lifecycle;
