//! The bounded animation loop.
//!
//! Each frame writes the next glyph, flushes it, waits one interval and then
//! erases it. The first failing sink call ends the run; no later frame is
//! attempted.

use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};
use twirl_domain::{FrameCounter, GlyphSequence};

use crate::ports::GlyphSink;
use crate::settings::SpinnerSettings;

/// A sink call that failed. `frame` is zero-based.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("failed to write glyph on frame {frame}")]
    Write {
        frame: usize,
        #[source]
        source: io::Error,
    },
    #[error("failed to flush output on frame {frame}")]
    Flush {
        frame: usize,
        #[source]
        source: io::Error,
    },
    #[error("failed to erase glyph on frame {frame}")]
    Erase {
        frame: usize,
        #[source]
        source: io::Error,
    },
}

impl FrameError {
    pub fn frame(&self) -> usize {
        match self {
            Self::Write { frame, .. } | Self::Flush { frame, .. } | Self::Erase { frame, .. } => {
                *frame
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frames: usize,
    pub elapsed: Duration,
}

pub async fn run<S>(sink: &mut S, settings: &SpinnerSettings) -> Result<FrameReport, FrameError>
where
    S: GlyphSink + ?Sized,
{
    let started = Instant::now();
    let mut glyphs = GlyphSequence::new();
    let mut frames = FrameCounter::new(settings.frame_count);

    info!(
        frames = settings.frame_count,
        interval = ?settings.frame_interval,
        expected = ?settings.total_duration(),
        "spinner started"
    );

    while let Some(frame) = frames.next_frame() {
        draw_frame(sink, frame, glyphs.next_glyph(), settings.frame_interval)
            .await
            .inspect_err(|err| warn!(frame = err.frame(), "spinner stopped early"))?;
    }

    let report = FrameReport {
        frames: frames.current(),
        elapsed: started.elapsed(),
    };
    info!(frames = report.frames, elapsed = ?report.elapsed, "spinner finished");

    Ok(report)
}

/// Runs every frame, then flushes the erase the last frame only queued.
pub async fn run_and_settle<S>(
    sink: &mut S,
    settings: &SpinnerSettings,
) -> Result<FrameReport, FrameError>
where
    S: GlyphSink + ?Sized,
{
    let report = run(sink, settings).await?;
    sink.flush().map_err(|source| FrameError::Flush {
        frame: report.frames.saturating_sub(1),
        source,
    })?;
    Ok(report)
}

async fn draw_frame<S>(
    sink: &mut S,
    frame: usize,
    glyph: char,
    interval: Duration,
) -> Result<(), FrameError>
where
    S: GlyphSink + ?Sized,
{
    debug!(frame, %glyph, "drawing frame");

    sink.write_glyph(glyph)
        .map_err(|source| FrameError::Write { frame, source })?;
    sink.flush()
        .map_err(|source| FrameError::Flush { frame, source })?;
    sleep(interval).await;
    sink.erase()
        .map_err(|source| FrameError::Erase { frame, source })
}
