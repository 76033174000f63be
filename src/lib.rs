//! Traffic Timeline Library
//!
//! A small intersection simulation (traffic lights plus advisory signs) that
//! can be stepped headless or interactively from a terminal.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
