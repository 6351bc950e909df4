//! logsift
//!
//! Terminal viewer for pipe-delimited application logs served over HTTP.
//!
//! Pure core (`model`, `parser`, `state`) with an impure shell (`source`,
//! `config`, `logging`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
