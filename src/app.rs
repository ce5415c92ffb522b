use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::action::Action;
use crate::config::Config;
use crate::error::AppError;
use crate::event::{Event, EventSource};
use crate::input::InputHandler;
use crate::system::sampler::Sampler;
use crate::system::snapshot::Snapshot;
use crate::system::source::MetricsSource;
use crate::system::stats::SystemStats;
use crate::ui::{self, DisplayOptions};
use crate::view::{TermSize, ViewState};

/// The sample → render → poll cycle. Owns the session state for its lifetime.
pub struct App<S> {
    sampler: Sampler<S>,
    pub view: ViewState,
    input: InputHandler,
    display: DisplayOptions,
    pub snapshot: Snapshot,
    pub stats: SystemStats,
    pub chrome_repaints: usize,
    too_small: bool,
}

impl<S: MetricsSource> App<S> {
    pub fn new(source: S, config: &Config) -> Self {
        App {
            sampler: Sampler::new(source),
            view: ViewState::new(config.initial_sort(), config.general.sort_reversed),
            input: InputHandler::new(config.input_timings()),
            display: config.display_options(),
            snapshot: Snapshot::default(),
            stats: SystemStats::default(),
            chrome_repaints: 0,
            too_small: false,
        }
    }

    /// Runs until quit (`Ok`) or until an interrupt or fatal drawing error.
    pub async fn run<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<(), AppError> {
        loop {
            self.tick_frame(terminal).await?;

            loop {
                let timeout = self.input.poll_timeout(Instant::now());
                let event = events.next_within(timeout).await?;
                let had_key = matches!(event, Some(Event::Key(_)));
                if !self.handle_event(event, Instant::now())? {
                    return Ok(());
                }
                if had_key {
                    self.render(terminal)?;
                }
                if !self.input.is_armed() {
                    break;
                }
            }
        }
    }

    /// Steps 1–4 of a tick: stats, snapshot, resize check, paint.
    pub async fn tick_frame<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        self.refresh().await;

        let size = terminal
            .size()
            .map_err(|e| AppError::Render(e.to_string()))?;
        if self.observe_size(TermSize::new(size.width, size.height)) {
            terminal
                .clear()
                .map_err(|e| AppError::Render(e.to_string()))?;
        }
        self.render(terminal)
    }

    pub async fn refresh(&mut self) {
        self.stats = self.sampler.system_stats();
        self.snapshot = self
            .sampler
            .sample(self.view.sort_strategy, self.view.sort_reversed)
            .await;
        self.view.clamp_scroll(self.snapshot.len());
    }

    /// Returns `true` (and counts a chrome repaint) when the size changed.
    pub fn observe_size(&mut self, size: TermSize) -> bool {
        let changed = self.view.observe_size(size);
        if changed {
            self.chrome_repaints += 1;
        }
        changed
    }

    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut outcome = Ok(());
        terminal
            .draw(|frame| {
                outcome = ui::draw(
                    frame,
                    &self.snapshot,
                    &self.stats,
                    &self.view,
                    &self.display,
                );
            })
            .map_err(|e| AppError::Render(e.to_string()))?;

        match outcome {
            Ok(()) => {
                self.too_small = false;
                Ok(())
            }
            Err(AppError::TerminalTooSmall { width, height }) if width == 0 || height == 0 => {
                Err(AppError::TerminalTooSmall { width, height })
            }
            Err(AppError::TerminalTooSmall { width, height }) => {
                if !self.too_small {
                    tracing::warn!(width, height, "terminal too small for layout");
                }
                self.too_small = true;
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Step 5: applies one poll result. Returns `Ok(false)` on quit.
    pub fn handle_event(&mut self, event: Option<Event>, now: Instant) -> Result<bool, AppError> {
        let action = match event {
            Some(Event::Key(key)) => self.input.on_key(key, now),
            Some(Event::Interrupt) => Action::Interrupt,
            Some(Event::Resize) => Action::None,
            None => self.input.on_timeout(),
        };
        if action == Action::Interrupt {
            return Err(AppError::Interrupted);
        }
        Ok(self.view.apply(action, self.snapshot.len()))
    }

    pub fn is_too_small(&self) -> bool {
        self.too_small
    }
}
