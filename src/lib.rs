//! Outpost - Minimal HTTP/1.1 File Server
//!
//! Core library for HTTP handling over raw TCP streams.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
