//! A multilingual typosquatting permutation engine and enrichment
//! pipeline: language/keyboard-aware generators feed a staged concurrent
//! dataflow (enumerate, generate, dedup, enrich, filter, output).

pub mod algorithms;
pub mod cache;
pub mod cli;
pub mod collectors;
pub mod config;
pub mod domain;
pub mod languages;
pub mod output;
pub mod pipeline;

pub mod error;
pub mod tlds;

pub use error::{Error, Result};
