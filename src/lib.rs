//! Professor Finder - Conversational Professor Recommendations
//!
//! A turn-based chat service: the user names a university, then a class, and
//! receives the top-rated professors teaching it. The server holds no
//! conversation memory; each request carries the dialogue state forward.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
