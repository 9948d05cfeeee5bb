//! Minimal chat relay: serves a landing page and forwards `/chat` messages to an
//! external question-answering API.

pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
