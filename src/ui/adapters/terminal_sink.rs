use std::fs::File;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::Print;
use crossterm::tty::IsTty;
use twirl_app::ports::GlyphSink;

/// Moves the cursor one cell left; interactive terminals then overwrite the glyph.
pub const BACKSPACE: char = '\u{8}';

/// Draws glyphs with crossterm commands onto any writer.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<File> {
    /// Opens a sink on a private duplicate of the stdout descriptor.
    ///
    /// Write errors on the duplicate surface as-is, including `EBADF`, which
    /// `io::stdout()` would swallow. Fails with `EBADF` when stdout was closed
    /// before the process started.
    pub fn stdout() -> io::Result<Self> {
        let out = File::from(duplicate_stdout()?);
        #[cfg(unix)]
        ensure_not_closed(&out)?;
        Ok(Self::new(out))
    }

    /// Backspace erasure only renders correctly on a tty.
    pub fn is_terminal(&self) -> bool {
        self.out.is_tty()
    }
}

#[cfg(unix)]
fn duplicate_stdout() -> io::Result<std::os::fd::OwnedFd> {
    use std::os::fd::AsFd;

    io::stdout().as_fd().try_clone_to_owned()
}

#[cfg(windows)]
fn duplicate_stdout() -> io::Result<std::os::windows::io::OwnedHandle> {
    use std::os::windows::io::AsHandle;

    io::stdout().as_handle().try_clone_to_owned()
}

/// The Rust runtime reopens a closed stdout as `/dev/null` in read-write mode
/// before `main` runs. Shell redirections to `/dev/null` open it write-only,
/// so a read-write `/dev/null` on fd 1 stands in for a closed descriptor.
#[cfg(unix)]
fn ensure_not_closed(out: &File) -> io::Result<()> {
    use std::os::fd::AsRawFd;
    use std::os::unix::fs::{FileTypeExt, MetadataExt};

    let meta = out.metadata()?;
    if !meta.file_type().is_char_device() {
        return Ok(());
    }
    let Ok(null) = std::fs::metadata("/dev/null") else {
        return Ok(());
    };
    if meta.rdev() != null.rdev() {
        return Ok(());
    }

    // SAFETY: F_GETFL only reads the status flags of a descriptor `out` owns.
    let flags = unsafe { libc::fcntl(out.as_raw_fd(), libc::F_GETFL) };
    if flags == -1 {
        return Err(io::Error::last_os_error());
    }
    if flags & libc::O_ACCMODE == libc::O_RDWR {
        return Err(io::Error::from_raw_os_error(libc::EBADF));
    }
    Ok(())
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GlyphSink for TerminalSink<W> {
    fn write_glyph(&mut self, glyph: char) -> io::Result<()> {
        queue!(self.out, Print(glyph))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn erase(&mut self) -> io::Result<()> {
        queue!(self.out, Print(BACKSPACE))
    }
}
