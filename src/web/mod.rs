//! HTTP API for promptchart
//!
//! Serves chart resolution over JSON.

mod server;

pub use server::*;
