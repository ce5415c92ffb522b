use ratatui::DefaultTerminal;

/// Raw mode + alternate screen for the lifetime of the value.
///
/// `ratatui::init` also installs a panic hook that restores the terminal;
/// `Drop` covers every other exit path.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn acquire() -> Self {
        Self {
            terminal: ratatui::init(),
        }
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
