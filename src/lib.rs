// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod specs;

pub mod data;
pub mod markdown;
pub mod params;
pub mod progress;
pub mod readme;
pub mod runner;
pub mod workbook;
