pub mod cli;
pub mod export;
pub mod interactive;
pub mod ports;
pub mod renderer;
