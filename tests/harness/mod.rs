use twirl::app::settings::SpinnerSettings;
use twirl::app::spinner_loop::{self, FrameError, FrameReport};
use twirl::ui::adapters::TerminalSink;
use twirl::ui::adapters::terminal_sink::BACKSPACE;

/// Stand-in for the erase byte so snapshots stay printable.
pub const ERASE_MARK: char = '⌫';

pub fn settings_with_frames(frame_count: usize) -> SpinnerSettings {
    SpinnerSettings {
        frame_count,
        ..SpinnerSettings::default()
    }
}

pub async fn run_to_buffer(
    settings: &SpinnerSettings,
) -> (Vec<u8>, Result<FrameReport, FrameError>) {
    let mut sink = TerminalSink::new(Vec::new());
    let result = spinner_loop::run(&mut sink, settings).await;
    (sink.into_inner(), result)
}

pub fn visible(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace(BACKSPACE, &ERASE_MARK.to_string())
}
