//! Client-side core of JustStream.
//!
//! This crate holds everything the site needs that does not touch the browser: the mock
//! content service, the application state slices and their reducers, the infinite scroll
//! policy and the playback transport. The site only adds the browser adapters on top.

pub mod actions;
pub mod config;
pub mod format;
pub mod generator;
pub mod lookup;
pub mod pagination;
pub mod player;
pub mod search;
pub mod service;
pub mod store;

mod error;

pub use config::CatalogConfig;
pub use error::{Error, Result};
