use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::sort::SortStrategy;

/// Second stage of the `s` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCapture {
    Idle,
    Armed { deadline: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTimings {
    /// Bound on the per-tick wait for a key.
    pub idle: Duration,
    /// How long the second key of a sort command is awaited.
    pub sort_window: Duration,
    /// Measurement window given to CPU sorting.
    pub cpu_window: Duration,
}

impl Default for InputTimings {
    fn default() -> Self {
        Self {
            idle: Duration::from_millis(500),
            sort_window: Duration::from_millis(200),
            cpu_window: crate::sort::DEFAULT_CPU_WINDOW,
        }
    }
}

/// Maps keys to actions. Holds only the sort-capture sub-state.
#[derive(Debug, Clone)]
pub struct InputHandler {
    timings: InputTimings,
    capture: SortCapture,
}

impl InputHandler {
    pub fn new(timings: InputTimings) -> Self {
        Self {
            timings,
            capture: SortCapture::Idle,
        }
    }

    pub fn capture(&self) -> SortCapture {
        self.capture
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.capture, SortCapture::Armed { .. })
    }

    /// How long the next poll may wait for a key.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.capture {
            SortCapture::Idle => self.timings.idle,
            SortCapture::Armed { deadline } => deadline.saturating_duration_since(now),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        // Ctrl+C always interrupts, even mid-command.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.capture = SortCapture::Idle;
            return Action::Interrupt;
        }

        match self.capture {
            SortCapture::Armed { deadline } if now <= deadline => {
                self.capture = SortCapture::Idle;
                self.map_sort_key(key.code)
            }
            SortCapture::Armed { .. } => {
                // The window closed before this key was read.
                self.capture = SortCapture::Idle;
                Action::ClearSort
            }
            SortCapture::Idle => self.map_key_normal(key.code, now),
        }
    }

    /// No key arrived within [`poll_timeout`](Self::poll_timeout).
    pub fn on_timeout(&mut self) -> Action {
        match self.capture {
            SortCapture::Armed { .. } => {
                self.capture = SortCapture::Idle;
                Action::ClearSort
            }
            SortCapture::Idle => Action::None,
        }
    }

    fn map_key_normal(&mut self, code: KeyCode, now: Instant) -> Action {
        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Down => Action::ScrollDown,
            KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('s') => {
                self.capture = SortCapture::Armed {
                    deadline: now + self.timings.sort_window,
                };
                Action::ArmSort
            }
            _ => Action::None,
        }
    }

    fn map_sort_key(&self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('c') => Action::SelectSort(SortStrategy::ByCpuPercent {
                window: self.timings.cpu_window,
            }),
            KeyCode::Char('r') => Action::SelectSort(SortStrategy::ByMemPercent),
            KeyCode::Char('p') => Action::SelectSort(SortStrategy::ByPid),
            KeyCode::Char('n') => Action::SelectSort(SortStrategy::ByName),
            KeyCode::Char('6') => Action::ToggleReverse,
            _ => Action::ClearSort,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(InputTimings::default())
    }
}
