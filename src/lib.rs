//! prodadmin
//!
//! Terminal admin client for a remote product catalog REST service.
//!
//! The crate follows a Pure Core / Impure Shell split: `view_state` and
//! `state` hold the filter → sort → paginate pipeline and the key handling as
//! plain data transitions, while `api`, `export` and `view` perform the HTTP,
//! file and terminal I/O.

pub mod api;
pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
