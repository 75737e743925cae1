//! fnlist
//!
//! List controller for the events functions of an editor extension: search,
//! inline rename with uniqueness checks, add with generated names, delete
//! and reorder, over a host-owned container and an external list widget.
//!
//! Pure core (`model`, `state`) with the widget contract and the full-screen
//! terminal UI in `view`. `session` ties a project to one list; `console` is
//! the line-oriented shell used when input is piped.

pub mod command;
pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod session;
pub mod state;
pub mod view;
