// src/lib.rs

//! feedwatch library
//!
//! Scans syndication feeds for labeled pattern matches, deduplicating
//! against a persistent seen-link store so nothing is reported twice.

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod store;
