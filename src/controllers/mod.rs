pub mod blocking;
pub mod output_controller;
