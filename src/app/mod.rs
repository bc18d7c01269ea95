pub mod ports;
pub mod settings;
pub mod spinner_loop;
