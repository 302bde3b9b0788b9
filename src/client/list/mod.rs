//! The list-view controller shared by every resource screen.
//!
//! Each list screen owns a [`ListQuery`] derived from the URL and a
//! [`ListState`] holding the rows. Any query change triggers exactly one
//! fetch; responses are applied through a generation token so a slow
//! response can never overwrite the result of a newer request. Both types
//! are plain data, independent of the UI layer, and tested natively.

pub mod query;
pub mod state;

pub use query::{DramaQuery, DramaSort, ListQuery};
pub use state::{ListPhase, ListState};

#[cfg(test)]
mod tests;
