//! Fetch lifecycle state for a list screen.
//!
//! A screen calls [`ListState::begin`] before issuing a request and hands
//! the returned generation back through [`ListState::resolve`] or
//! [`ListState::reject`]. Only the generation from the most recent `begin`
//! is accepted; anything older is a stale response from an abandoned
//! request and is discarded without touching the rows or the loading flag.

use crate::model::api::PageData;

/// Visual phase of a list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Populated,
    Empty,
    Errored,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    data: PageData<T>,
    phase: ListPhase,
    generation: u64,
}

// hand-written so `T: Default` is not required of row types
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            data: PageData::default(),
            phase: ListPhase::Idle,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Marks a new fetch as started and returns its generation token.
    /// Any response carrying an older token is stale from here on.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        self.generation
    }

    /// Applies a successful response. Rows and total are replaced
    /// together. Returns false (and changes nothing) for a stale
    /// generation.
    pub fn resolve(&mut self, generation: u64, data: PageData<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = if data.items.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        };
        self.data = data;
        true
    }

    /// Records a failed fetch. The previous rows stay visible so the
    /// screen keeps working while the server misbehaves. Returns false
    /// for a stale generation; callers only surface the error when the
    /// rejection was applied.
    pub fn reject(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = ListPhase::Errored;
        true
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn rows(&self) -> &[T] {
        &self.data.items
    }

    pub fn data(&self) -> &PageData<T> {
        &self.data
    }
}
