use crate::sort::SortStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ctrl+C or SIGINT; ends the session with the interrupt exit code.
    Interrupt,
    ScrollUp,
    ScrollDown,
    /// First half of the two-key sort command.
    ArmSort,
    SelectSort(SortStrategy),
    ToggleReverse,
    ClearSort,
    None,
}
