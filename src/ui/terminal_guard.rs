use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::QueueableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::Arc;

/// Terminal modes the dashboard switches on at startup.
///
/// Mouse capture is optional: with it on, row clicks and clicks outside the
/// action dialog reach the app, but the terminal's own text selection is lost
/// until the modes are left again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModes {
    pub mouse: bool,
}

impl TerminalModes {
    /// Queue the escape sequences that enter the modes, then flush.
    pub fn enter<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.queue(EnterAlternateScreen)?;
        if self.mouse {
            out.queue(EnableMouseCapture)?;
        }
        out.queue(TermClear(ClearType::All))?;
        out.queue(Hide)?;
        out.flush()
    }

    /// Undo `enter` in reverse order. Raw mode is handled separately.
    pub fn leave<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.mouse {
            out.queue(DisableMouseCapture)?;
        }
        out.queue(LeaveAlternateScreen)?;
        out.queue(Show)?;
        out.flush()
    }
}

/// Holds the active modes until they are left, either on drop or from the
/// panic hook, whichever comes first.
pub struct TerminalGuard {
    active: Arc<Mutex<Option<TerminalModes>>>,
}

impl TerminalGuard {
    fn new(modes: TerminalModes) -> Self {
        Self {
            active: Arc::new(Mutex::new(Some(modes))),
        }
    }

    fn install_panic_hook(&self) {
        let active = Arc::clone(&self.active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(modes) = active.lock().take() {
                leave_terminal(modes);
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Some(modes) = self.active.lock().take() {
            leave_terminal(modes);
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn leave_terminal(modes: TerminalModes) {
    let _ = disable_raw_mode();
    if let Err(err) = modes.leave(&mut io::stdout()) {
        tracing::warn!(error = %err, "Failed to restore terminal modes");
    }
}

pub fn setup_terminal(
    modes: TerminalModes,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    modes.enter(&mut stdout)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::new(modes);
    guard.install_panic_hook();
    tracing::debug!(mouse = modes.mouse, "Terminal modes entered");

    Ok((terminal, guard))
}
