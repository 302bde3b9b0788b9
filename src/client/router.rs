use dioxus::prelude::*;

use crate::client::components::AdminLayout;
use crate::client::routes::{
    Actors, Dashboard, DramaDetail, Dramas, Genres, Login, NotFound, Users,
};

/// List screens keep their pagination, search, and filter state in the
/// URL query string, so the raw parameters ride along on the route.
/// Missing parameters decode as their type defaults and are normalized
/// by the query types.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AdminLayout)]

    #[route("/")]
    Dashboard {},

    #[route("/dramas?:page&:search&:status&:genre&:sort")]
    Dramas { page: u64, search: String, status: String, genre: String, sort: String },

    #[route("/dramas/:id")]
    DramaDetail { id: i64 },

    #[route("/actors?:page&:search")]
    Actors { page: u64, search: String },

    #[route("/genres?:page&:search")]
    Genres { page: u64, search: String },

    #[route("/users?:page&:search")]
    Users { page: u64, search: String },

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Entry points for navigation links, with clean default query state.
    pub fn dramas() -> Self {
        Route::Dramas {
            page: 1,
            search: String::new(),
            status: String::new(),
            genre: String::new(),
            sort: String::new(),
        }
    }

    pub fn actors() -> Self {
        Route::Actors {
            page: 1,
            search: String::new(),
        }
    }

    pub fn genres() -> Self {
        Route::Genres {
            page: 1,
            search: String::new(),
        }
    }

    pub fn users() -> Self {
        Route::Users {
            page: 1,
            search: String::new(),
        }
    }
}
