//! Mail Zero HTTP API client.
//!
//! This crate provides a typed client for the session and mail connection
//! endpoints used by the terminal UI: reading the session, listing
//! connections, switching the active connection and updating the session.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::MailClient;
pub use client::builder::MailClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Connection, Session, SessionUser};
