//! Terminal lifecycle management.
//!
//! This module handles terminal setup, restore, and the panic hook.
//! Terminal state is guaranteed to be restored on:
//! - Normal exit (via the renderer's explicit release)
//! - Early return or unwinding (via `SurfaceGuard`'s Drop)
//! - Panic (via the panic hook)

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use mtg_core::interrupt::{StopReason, StopSignal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::render::{FrameStyle, render_frame};
use crate::surface::{ResourceError, Surface};

/// Upper bound on a single input poll, so signal-driven stops are noticed promptly.
const INPUT_POLL: Duration = Duration::from_millis(50);

static PANIC_HOOK: Once = Once::new();

/// Full-screen crossterm surface (raw mode + alternate screen).
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    style: FrameStyle,
    title: String,
}

impl TerminalSurface {
    /// Enters raw mode and the alternate screen.
    ///
    /// Installs the panic hook first. If setup fails halfway, whatever was
    /// already changed is restored before the error is returned.
    ///
    /// # Errors
    /// Returns [`ResourceError::Acquire`] if the terminal cannot be set up.
    pub fn acquire(style: FrameStyle, title: impl Into<String>) -> Result<Self, ResourceError> {
        install_panic_hook();
        match setup_terminal() {
            Ok(terminal) => {
                tracing::info!(?style, "terminal acquired");
                Ok(Self {
                    terminal,
                    style,
                    title: title.into(),
                })
            }
            Err(err) => {
                let _ = restore_terminal();
                Err(ResourceError::Acquire(err))
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn draw(&mut self, frame: &str) -> Result<(), ResourceError> {
        let (style, title) = (self.style, self.title.as_str());
        self.terminal
            .draw(|f| render_frame(f, frame, style, title))
            .map(|_| ())
            .map_err(ResourceError::Draw)
    }

    fn idle(&mut self, timeout: Duration, stop: &StopSignal) -> Result<(), ResourceError> {
        let deadline = Instant::now() + timeout;
        while !stop.is_requested() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            if event::poll(remaining.min(INPUT_POLL)).map_err(ResourceError::Input)? {
                let event = event::read().map_err(ResourceError::Input)?;
                if let Some(reason) = stop_reason_for(&event) {
                    tracing::debug!(%reason, "stop key pressed");
                    stop.request(reason);
                }
            }
        }
        Ok(())
    }

    fn release(&mut self) -> Result<(), ResourceError> {
        restore_terminal().map_err(ResourceError::Release)?;
        tracing::info!("terminal restored");
        Ok(())
    }
}

/// Maps a terminal event to a stop request.
///
/// Raw mode swallows SIGINT, so Ctrl+C arrives here as a key press.
pub fn stop_reason_for(event: &Event) -> Option<StopReason> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(StopReason::Interrupt)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(StopReason::Quit),
        _ => None,
    }
}

/// Sets up the terminal for the meter.
///
/// - Enables raw mode
/// - Enters alternate screen
/// - Hides the cursor and clears the screen
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restores terminal state.
///
/// - Leaves alternate screen
/// - Disables raw mode
///
/// This function is idempotent and safe to call multiple times.
fn restore_terminal() -> io::Result<()> {
    restore_with(
        // Leave alternate screen (while still in raw mode)
        || execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show),
        disable_raw_mode,
    )
}

/// Runs both restore steps even when the first fails and returns the first
/// error. A dead pty fails the screen write, but raw mode must still go.
fn restore_with(
    leave_screen: impl FnOnce() -> io::Result<()>,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let left = leave_screen();
    let raw = disable_raw();
    left.and(raw)
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });
}
