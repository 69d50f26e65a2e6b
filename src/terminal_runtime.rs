use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::{GridSize, WINDOW_TITLE, required_terminal_size};
use crate::error::AppError;

/// Set while the terminal reports key repeat and release as distinct events.
static KEY_EVENT_TYPES_PUSHED: AtomicBool = AtomicBool::new(false);

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide, SetTitle(WINDOW_TITLE)) {
            let _ = disable_raw_mode();
            return Err(error);
        }
        enable_key_event_types(&mut stdout);

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Asks the terminal to label autorepeat and release events, so a held key
/// is not read as a stream of fresh presses.
fn enable_key_event_types(stdout: &mut io::Stdout) {
    match terminal::supports_keyboard_enhancement() {
        Ok(true) => {
            let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
            match execute!(stdout, PushKeyboardEnhancementFlags(flags)) {
                Ok(()) => {
                    KEY_EVENT_TYPES_PUSHED.store(true, Ordering::SeqCst);
                    info!("terminal reports key event types");
                }
                Err(error) => warn!("failed to enable key event types: {error}"),
            }
        }
        Ok(false) => warn!("terminal cannot report key repeats; held keys will retrigger"),
        Err(error) => warn!("keyboard enhancement query failed: {error}"),
    }
}

/// Fails when the current terminal cannot show the whole board.
pub fn ensure_fits(bounds: GridSize) -> Result<(), AppError> {
    let (width, height) = terminal::size()?;
    check_fits((width, height), bounds)
}

fn check_fits((width, height): (u16, u16), bounds: GridSize) -> Result<(), AppError> {
    let (required_width, required_height) = required_terminal_size(bounds);
    if width < required_width || height < required_height {
        return Err(AppError::TerminalTooSmall {
            width,
            height,
            required_width,
            required_height,
        });
    }

    Ok(())
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let mut stdout = io::stdout();
    if KEY_EVENT_TYPES_PUSHED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    execute!(stdout, Show, LeaveAlternateScreen)
}
