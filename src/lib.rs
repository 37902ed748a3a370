//! Compact page indicator (pagedots)
//!
//! A row of page dots that shows a fixed window of slots even when there are
//! far more pages. Dots near the window edges shrink and a small pool of dot
//! items is recycled as the window scrolls.
//!
//! The core (`model`, `state`, `animation`) is pure and renderer agnostic.
//! `view` draws it with ratatui and hosts the interactive demo.

pub mod animation;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
