//! App controller: applies front-end commands to the scorer and history.
//!
//! The controller owns the one `MatchScorer` and the `HistoryStore`. Finished
//! matches are saved as soon as the scorer reports completion; "end & save"
//! saves the match as it stands. Destructive commands go through a
//! confirmation prompt first.

use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::core::{MatchScorer, ScoreEvent};
use crate::history::{HistoryStore, Storage};
use crate::types::{Command, Side};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Score,
    History,
}

/// A destructive command waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pending {
    Reset,
    EndMatch,
    ClearHistory,
}

impl Pending {
    pub fn prompt(&self) -> &'static str {
        match self {
            Pending::Reset => "Reset match?",
            Pending::EndMatch => "End match and save?",
            Pending::ClearHistory => "Delete all saved matches?",
        }
    }
}

pub struct App<S: Storage> {
    scorer: MatchScorer,
    history: HistoryStore<S>,
    screen: Screen,
    pending: Option<Pending>,
    selected: usize,
}

impl<S: Storage> App<S> {
    pub fn new(history: HistoryStore<S>) -> Self {
        Self {
            scorer: MatchScorer::new(),
            history,
            screen: Screen::Score,
            pending: None,
            selected: 0,
        }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn prompt(&self) -> Option<&'static str> {
        self.pending.map(|p| p.prompt())
    }

    /// Selected row on the history screen.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply one command.
    ///
    /// While a prompt is open only `Confirm` and `Cancel` do anything.
    pub fn handle(&mut self, command: Command) {
        if let Some(pending) = self.pending {
            match command {
                Command::Confirm => {
                    self.pending = None;
                    self.apply(pending);
                }
                Command::Cancel => self.pending = None,
                _ => {}
            }
            return;
        }

        match (self.screen, command) {
            (Screen::Score, Command::Score(side)) => self.score(side),
            (Screen::Score, Command::EndMatch) if !self.scorer.match_over() => {
                self.pending = Some(Pending::EndMatch);
            }
            (Screen::Score, Command::Reset) => {
                if self.scorer.match_over() {
                    // Finished match is already saved; start the next one.
                    self.scorer.reset();
                } else {
                    self.pending = Some(Pending::Reset);
                }
            }
            (_, Command::ToggleHistory) => {
                self.screen = match self.screen {
                    Screen::Score => Screen::History,
                    Screen::History => Screen::Score,
                };
                self.selected = 0;
            }
            (Screen::History, Command::SelectPrev) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (Screen::History, Command::SelectNext) => {
                if self.selected + 1 < self.history.len() {
                    self.selected += 1;
                }
            }
            (Screen::History, Command::DeleteSelected) => {
                if self.history.delete_at(self.selected).is_some() {
                    self.clamp_selection();
                }
            }
            (Screen::History, Command::ClearHistory) if !self.history.is_empty() => {
                self.pending = Some(Pending::ClearHistory);
            }
            _ => {}
        }
    }

    fn score(&mut self, side: Side) {
        let event = self.scorer.score_point(side);
        if !event.changed() {
            debug!(side = side.label(), "point ignored; match is over");
            return;
        }
        if let ScoreEvent::MatchComplete(record) = event {
            self.history.save(record);
        }
    }

    fn apply(&mut self, pending: Pending) {
        match pending {
            Pending::Reset => self.scorer.reset(),
            Pending::EndMatch => {
                if let Some(record) = self.scorer.end_early() {
                    self.history.save(record);
                }
            }
            Pending::ClearHistory => {
                self.history.clear();
                self.selected = 0;
            }
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.history.len().saturating_sub(1));
    }

    /// Hash of everything the current screen shows.
    pub fn view_fingerprint<H: Hasher>(&self, state: &mut H) {
        self.screen.hash(state);
        self.pending.hash(state);
        match self.screen {
            Screen::Score => self.scorer.state().hash(state),
            Screen::History => {
                self.selected.hash(state);
                for record in self.history.matches() {
                    record.id.hash(state);
                }
            }
        }
    }
}
