//! Core domain model for songlist.
//!
//! This crate defines the song record, the in-memory song list, the
//! delimited-text song file, the listing renderer, and the validators used
//! by the interactive prompts.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod input;
pub mod list;
pub mod listing;
pub mod model;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use list::{Completion, SongList};
pub use model::Song;
pub use store::SongStore;
