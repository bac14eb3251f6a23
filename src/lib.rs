//! # Link Shortener
//!
//! A small URL shortening service built with Axum. Links live in process
//! memory and are lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, log events
//! - **Application Layer** ([`application`]) - Link creation, lookup and listing
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, remote log shipping
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` - Create a short link (optional custom code and validity)
//! - `GET /statistics` - List all links
//! - `GET /{code}` - Redirect to the original URL
//! - `GET /health` - Component health
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=8080
//! export LOG_ENDPOINT=""   # disable remote log shipping
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod routes;
pub mod server;
pub mod telemetry;
