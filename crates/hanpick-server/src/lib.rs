//! hanpick — keyword extraction server for Korean movie/media reviews.

pub mod routes;
pub mod state;
