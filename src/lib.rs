// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;

pub mod net;
pub mod loader;

pub mod table;
pub mod filter;

pub mod export;
pub mod download;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
