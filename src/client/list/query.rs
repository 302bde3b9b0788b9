//! URL-backed query state for the list screens.
//!
//! The page number, search text, and filters live in the URL query string
//! so the back button and bookmarks restore a screen exactly. Routes carry
//! the raw parameter values; these types normalize them (1-based page,
//! trimmed search, parsed filter enums) and encode the page-reset rules:
//! a new search or a changed filter always starts back at page 1.

use crate::model::drama::DramaStatus;

/// Page and search state shared by the actors, genres, and users screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Builds a query from raw route parameters. A missing page parameter
    /// decodes as 0 and is clamped to 1.
    pub fn from_route(page: u64, search: &str) -> Self {
        Self {
            page: page.max(1),
            search: search.trim().to_string(),
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page: page.max(1),
            search: self.search.clone(),
        }
    }

    /// A new search invalidates the old pagination position.
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            page: 1,
            search: search.trim().to_string(),
        }
    }
}

/// Sort orders the dramas endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DramaSort {
    #[default]
    Newest,
    Title,
    Rating,
    Views,
}

impl DramaSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            DramaSort::Newest => "newest",
            DramaSort::Title => "title",
            DramaSort::Rating => "rating",
            DramaSort::Views => "views",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "title" => DramaSort::Title,
            "rating" => DramaSort::Rating,
            "views" => DramaSort::Views,
            _ => DramaSort::Newest,
        }
    }

    pub const ALL: [DramaSort; 4] = [
        DramaSort::Newest,
        DramaSort::Title,
        DramaSort::Rating,
        DramaSort::Views,
    ];
}

/// Query state for the dramas screen: pagination and search plus the
/// status, genre, and sort filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DramaQuery {
    pub page: u64,
    pub search: String,
    pub status: Option<DramaStatus>,
    pub genre: Option<String>,
    pub sort: DramaSort,
}

impl DramaQuery {
    pub fn from_route(page: u64, search: &str, status: &str, genre: &str, sort: &str) -> Self {
        Self {
            page: page.max(1),
            search: search.trim().to_string(),
            status: DramaStatus::parse(status),
            genre: (!genre.is_empty()).then(|| genre.to_string()),
            sort: DramaSort::parse(sort),
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: &str) -> Self {
        Self {
            page: 1,
            search: search.trim().to_string(),
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: Option<DramaStatus>) -> Self {
        Self {
            page: 1,
            status,
            ..self.clone()
        }
    }

    pub fn with_genre(&self, genre: Option<String>) -> Self {
        Self {
            page: 1,
            genre,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: DramaSort) -> Self {
        Self {
            page: 1,
            sort,
            ..self.clone()
        }
    }

    /// Raw values for the route's query parameters, empty when unset.
    pub fn status_param(&self) -> String {
        self.status.map(|s| s.as_str().to_string()).unwrap_or_default()
    }

    pub fn genre_param(&self) -> String {
        self.genre.clone().unwrap_or_default()
    }

    pub fn sort_param(&self) -> String {
        self.sort.as_str().to_string()
    }
}
