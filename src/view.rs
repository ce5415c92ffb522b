use crate::action::Action;
use crate::sort::SortStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub columns: u16,
    pub lines: u16,
}

impl TermSize {
    pub fn new(columns: u16, lines: u16) -> Self {
        Self { columns, lines }
    }
}

/// Mutable session state, owned by the main loop for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub sort_strategy: Option<SortStrategy>,
    pub sort_reversed: bool,
    pub scroll_offset: usize,
    pub last_known_size: Option<TermSize>,
}

impl ViewState {
    pub fn new(sort_strategy: Option<SortStrategy>, sort_reversed: bool) -> Self {
        Self {
            sort_strategy,
            sort_reversed,
            scroll_offset: 0,
            last_known_size: None,
        }
    }

    /// Applies an input action. Returns `false` when the action ends the session.
    pub fn apply(&mut self, action: Action, snapshot_len: usize) -> bool {
        match action {
            Action::ScrollDown => {
                if self.scroll_offset + 1 < snapshot_len {
                    self.scroll_offset += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Action::SelectSort(strategy) => {
                tracing::debug!(sort = strategy.label(), "sort strategy selected");
                self.sort_strategy = Some(strategy);
            }
            Action::ToggleReverse => {
                self.sort_reversed = !self.sort_reversed;
                tracing::debug!(reversed = self.sort_reversed, "sort direction toggled");
            }
            Action::ClearSort => {
                tracing::debug!("sort strategy cleared");
                self.sort_strategy = None;
            }
            Action::Quit | Action::Interrupt => return false,
            Action::ArmSort | Action::None => {}
        }
        true
    }

    /// Keeps `scroll_offset` inside `[0, max(0, len - 1)]` after a new snapshot.
    pub fn clamp_scroll(&mut self, snapshot_len: usize) {
        self.scroll_offset = self.scroll_offset.min(snapshot_len.saturating_sub(1));
    }

    /// Records the live terminal size. Returns `true` when it differs from the
    /// previous observation, meaning chrome must be repainted.
    pub fn observe_size(&mut self, size: TermSize) -> bool {
        if self.last_known_size == Some(size) {
            return false;
        }
        tracing::debug!(
            columns = size.columns,
            lines = size.lines,
            "terminal resized"
        );
        self.last_known_size = Some(size);
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(None, false)
    }
}
