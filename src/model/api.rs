//! Wire-level types shared by every API call.
//!
//! The Marquee API wraps every response in a `{success, message, data}`
//! envelope, and list endpoints answer in one of two shapes: a bare array
//! (endpoints that return the full result set) or a paged object
//! `{items, total}`. Both ambiguities are resolved here, once, so the rest
//! of the client only ever sees [`PageData`].

use serde::Deserialize;

/// Rows per page on every list screen.
pub const PAGE_SIZE: u64 = 10;

/// The `{success, message, data}` wrapper used by every API response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// A list response as the server sends it.
///
/// Decoded untagged: a JSON object with `items`/`total` matches
/// [`ListPayload::Paged`], a JSON array matches [`ListPayload::Bare`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged { items: Vec<T>, total: u64 },
    Bare(Vec<T>),
}

/// Canonical list page, after the dual wire shape has been resolved.
///
/// `server_paged` records which shape produced this page; it decides
/// whether "next" can trust `total` or has to fall back to the
/// fewer-than-a-page heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub server_paged: bool,
}

impl<T> From<ListPayload<T>> for PageData<T> {
    fn from(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Paged { items, total } => Self {
                items,
                total,
                server_paged: true,
            },
            ListPayload::Bare(items) => Self {
                total: items.len() as u64,
                items,
                server_paged: false,
            },
        }
    }
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            server_paged: true,
        }
    }
}

impl<T> PageData<T> {
    /// Wraps an unpaginated full result set (seasons, episodes).
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            total: items.len() as u64,
            items,
            server_paged: false,
        }
    }

    /// Number of pages at [`PAGE_SIZE`] rows per page.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(PAGE_SIZE)
    }

    /// Whether a page before `page` exists. `page` is 1-based.
    pub fn has_prev(&self, page: u64) -> bool {
        page > 1
    }

    /// Whether a page after `page` exists. `page` is 1-based.
    ///
    /// Bare-array responses carry no usable total, so a full page is taken
    /// to mean "there may be more".
    pub fn has_next(&self, page: u64) -> bool {
        if self.server_paged {
            self.total > 0 && page < self.total_pages()
        } else {
            self.items.len() as u64 >= PAGE_SIZE
        }
    }
}

#[cfg(test)]
mod tests;
