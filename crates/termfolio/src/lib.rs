//! A terminal portfolio.
//!
//! The window shows four tabs. The home tab types a short `whoami`
//! transcript above a grid of dotfiles that reveal themselves character by
//! character; the other tabs type a command and print a listing. The typing
//! engine lives in `termfolio_core`; this crate adds configuration, the
//! dotfile fetcher, terminal handling and rendering.

pub mod app;
pub mod config;
pub mod content;
pub mod dotfiles;
pub mod services;
pub mod view;
