//! # Objfilters Architecture
//!
//! Objfilters is a **UI-agnostic library** for managing the object filters of a
//! remote connection configuration, with a CLI client layered on top. The filter
//! list is one section of a larger connection settings document; this crate edits
//! that section and rewrites the document as a whole.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                                │
//! │  - Parses arguments, renders output, owns the terminal       │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands, returns structured Results     │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Business logic: edit flow, list, delete                   │
//! │  - Talks to storage and the form host through traits only    │
//! └──────────────────────────────────────────────────────────────┘
//!                    │                      │
//!                    ▼                      ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Storage Layer (store/)  │  │  Form Layer (form/)          │
//! │  - ConfigStore trait     │  │  - FormSpec declaration      │
//! │  - FileStore, InMemory   │  │  - PromptHost, ScriptedHost  │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or assumes a terminal.
//! The edit flow suspends at the form host and resumes on submit or dismissal;
//! a dismissal means no mutation and no persistence call.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`form`]: Declarative form specs and the hosts that present them
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`FilterRecord` and its normalization)
//! - [`config`]: The persisted connection configuration document
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
