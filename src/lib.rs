pub mod badge;
pub mod cli;
pub mod error;
pub mod gist_stars;
pub mod github;
pub mod service;
pub mod text;
pub mod types;
