pub mod computer;
pub mod ports;
