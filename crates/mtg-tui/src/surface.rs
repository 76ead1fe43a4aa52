//! Display surfaces and their scoped release.

use std::io;
use std::time::Duration;

use mtg_core::interrupt::StopSignal;
use thiserror::Error;

/// Failure to acquire, use, or release a display surface. Never retried.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Failed to acquire display surface")]
    Acquire(#[source] io::Error),
    #[error("Failed to release display surface")]
    Release(#[source] io::Error),
    #[error("Failed to draw frame")]
    Draw(#[source] io::Error),
    #[error("Failed to read terminal input")]
    Input(#[source] io::Error),
}

/// Something a frame can be drawn onto.
///
/// Implementations are acquired by their constructor; the renderer wraps them
/// in a [`SurfaceGuard`] so `release` runs exactly once.
pub trait Surface {
    /// Replaces whatever is on screen with `frame`.
    ///
    /// # Errors
    /// Returns [`ResourceError::Draw`] if the surface cannot be written.
    fn draw(&mut self, frame: &str) -> Result<(), ResourceError>;

    /// Waits out one refresh interval, returning early once `stop` is requested.
    ///
    /// Surfaces that read input turn stop keys into requests on `stop`.
    ///
    /// # Errors
    /// Returns [`ResourceError::Input`] if input polling fails.
    fn idle(&mut self, timeout: Duration, stop: &StopSignal) -> Result<(), ResourceError> {
        stop.wait_timeout(timeout);
        Ok(())
    }

    /// Returns the underlying device to its prior state.
    ///
    /// # Errors
    /// Returns [`ResourceError::Release`] if restoring fails.
    fn release(&mut self) -> Result<(), ResourceError>;
}

/// Owns an acquired surface and releases it exactly once: explicitly through
/// [`SurfaceGuard::release`], or on drop.
pub struct SurfaceGuard<S: Surface> {
    surface: S,
    released: bool,
}

impl<S: Surface> SurfaceGuard<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            released: false,
        }
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Releases the surface. Later calls are no-ops.
    ///
    /// # Errors
    /// Propagates the surface's release error from the first call.
    pub fn release(&mut self) -> Result<(), ResourceError> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.surface.release()
    }
}

impl<S: Surface> Drop for SurfaceGuard<S> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::warn!(error = %err, "display surface release failed during drop");
        }
    }
}
