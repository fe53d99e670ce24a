//! Prompt Forge - URL analysis and config synthesis backend
//!
//! This crate analyzes arbitrary web pages for design and content signals
//! (title, description, brand colors, fonts, keywords) and renders the
//! extracted signals plus user-entered project fields into a structured
//! project configuration document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
