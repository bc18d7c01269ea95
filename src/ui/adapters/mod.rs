pub mod terminal_sink;

pub use terminal_sink::TerminalSink;
