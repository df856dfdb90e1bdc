//! Library components of the `finprof` command-line tool.

pub mod config;
pub mod logging;
pub mod output;
