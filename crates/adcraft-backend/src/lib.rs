//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, talks to the creative pipeline's
//! REST API, routes bridge messages to services, and manages shared state used
//! by asynchronous tasks.

mod api;
mod app;
mod config;
mod flows;
mod generation;
mod poller;
mod runtime;
mod services;
mod state;

#[cfg(test)]
mod testing;

pub use crate::runtime::run;
