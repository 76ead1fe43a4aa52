//! Periodic refresh loop.
//!
//! ```text
//! Running --(stop requested | draw failed)--> Stopping --(release, persist)--> Stopped
//! ```
//!
//! The first frame is drawn as soon as the loop starts. After that a stop
//! request is checked before every tick and interrupts the wait between
//! ticks. Leaving `Running` always releases the surface and then writes the
//! last frame to the persistent writer, so the final cost survives the
//! alternate screen.

use std::io::{self, Write};
use std::time::Duration;

use mtg_core::frames::FrameSource;
use mtg_core::interrupt::{StopReason, StopSignal};
use thiserror::Error;

use crate::surface::{ResourceError, Surface, SurfaceGuard};

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    Running,
    Stopping,
    Stopped,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Last frame computed, if any tick happened.
    pub final_frame: Option<String>,
    pub ticks: u64,
    /// `None` when the loop ended because the surface failed.
    pub stop_reason: Option<StopReason>,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Surface(#[from] ResourceError),
    #[error("Failed to write final frame")]
    Persist(#[source] io::Error),
}

pub struct PeriodicRenderer<F, S, W>
where
    F: FrameSource,
    S: Surface,
    W: Write,
{
    source: F,
    surface: SurfaceGuard<S>,
    persist: W,
    stop: StopSignal,
    interval: Duration,
    state: RendererState,
    last_frame: Option<String>,
    ticks: u64,
}

impl<F, S, W> PeriodicRenderer<F, S, W>
where
    F: FrameSource,
    S: Surface,
    W: Write,
{
    /// Takes ownership of an already acquired `surface`.
    ///
    /// The surface is released exactly once: at the end of [`Self::run`], or
    /// when the renderer is dropped without running.
    pub fn new(source: F, surface: S, persist: W, stop: StopSignal) -> Self {
        Self {
            source,
            surface: SurfaceGuard::new(surface),
            persist,
            stop,
            interval: DEFAULT_INTERVAL,
            state: RendererState::Running,
            last_frame: None,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    /// Runs until a stop is requested or the surface fails, then tears down.
    ///
    /// Calling `run` again after it returned does nothing.
    ///
    /// # Errors
    /// A draw, input or release failure is returned as
    /// [`RenderError::Surface`] after teardown and the final write have
    /// happened. A failed final write is [`RenderError::Persist`].
    pub fn run(&mut self) -> Result<RunOutcome, RenderError> {
        if self.state != RendererState::Running {
            return Ok(self.outcome(self.stop.reason()));
        }

        tracing::info!(interval_ms = self.interval.as_millis() as u64, "meter started");
        let failure = self.tick_loop().err();
        if let Some(err) = &failure {
            tracing::warn!(error = %err, "display surface failed; stopping");
        }

        self.state = RendererState::Stopping;
        let released = self.surface.release();
        let persisted = self.persist_final_frame();
        self.state = RendererState::Stopped;

        let stop_reason = if failure.is_some() {
            None
        } else {
            self.stop.reason()
        };
        tracing::info!(ticks = self.ticks, ?stop_reason, "meter stopped");

        if let Some(err) = failure {
            if let Err(release_err) = released {
                tracing::warn!(error = %release_err, "release failed after surface error");
            }
            if let Err(persist_err) = persisted {
                tracing::warn!(error = %persist_err, "final frame not written after surface error");
            }
            return Err(err.into());
        }
        released?;
        persisted.map_err(RenderError::Persist)?;
        Ok(self.outcome(stop_reason))
    }

    fn tick_loop(&mut self) -> Result<(), ResourceError> {
        // A stop pending before the first tick still gets that tick drawn.
        loop {
            let frame = self.source.next_frame();
            self.ticks += 1;
            tracing::debug!(tick = self.ticks, %frame, "tick");

            let drawn = self.surface.surface_mut().draw(&frame);
            self.last_frame = Some(frame);
            drawn?;

            if self.stop.is_requested() {
                return Ok(());
            }
            self.surface
                .surface_mut()
                .idle(self.interval, &self.stop)?;
            if self.stop.is_requested() {
                return Ok(());
            }
        }
    }

    fn persist_final_frame(&mut self) -> io::Result<()> {
        let Some(frame) = &self.last_frame else {
            return Ok(());
        };
        writeln!(self.persist, "{frame}")?;
        self.persist.flush()
    }

    fn outcome(&self, stop_reason: Option<StopReason>) -> RunOutcome {
        RunOutcome {
            final_frame: self.last_frame.clone(),
            ticks: self.ticks,
            stop_reason,
        }
    }
}
