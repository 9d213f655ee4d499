//! Ultrahuman MCP Library
//!
//! Exposes Ultrahuman Partnership API health metrics as MCP tools and resources.

pub mod api;
pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod tools;
