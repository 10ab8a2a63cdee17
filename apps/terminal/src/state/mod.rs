//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      AppConfig           │        │     SplitSession         │      │
//! │  │                          │        │                          │      │
//! │  │  currency symbol/code    │───────►│  check amount            │      │
//! │  │  decimals                │ start  │  tip percentage          │      │
//! │  │  default tip             │ values │  party size              │      │
//! │  │  output format           │        │  display sink            │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  AppConfig: read-only after startup                                    │
//! │  SplitSession: single owner, single thread, no locking                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, OutputFormat, CONFIG_PATH_ENV};
pub use session::{DisplaySink, InputEvent, SplitSession, SplitSnapshot};
