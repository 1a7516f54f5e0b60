//! Console client for the companies analytics API.
//!
//! The crate splits into four layers:
//!
//! - [`client`] talks HTTP to the backend and maps failures into a small
//!   error taxonomy.
//! - [`dto`] mirrors the wire shapes leniently, so older or sparser payloads
//!   still render.
//! - [`view`] models the idle/loading/success/error lifecycle each screen
//!   walks through.
//! - [`render`] turns resolved views into coloured terminal output.
//!
//! `main.rs` wires a clap subcommand per backend query onto these layers.

pub mod client;
pub mod dto;
pub mod render;
pub mod view;
