//! # Core Application Logic
//!
//! Everything here is independent of the terminal. No ratatui, no crossterm.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Intent / Command     │
//!                    │  • Selection cursor     │
//!                    │  • Grade partition      │
//!                    │  • Due date parsing     │
//!                    │  • Config, Logger       │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    API     │
//!           │  Adapter   │─── tasks ───▶│  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: what screens ask for (`Intent`, `Command`, `Request`, `Outcome`)
//! - [`selection`]: the clamped list cursor
//! - [`grades`]: failing/passing ordering of enrollments
//! - [`due_date`]: strict `YYYY-MM-DD` parsing
//! - [`config`]: layered configuration
//! - [`logging`]: the injected `Logger`

pub mod action;
pub mod config;
pub mod due_date;
pub mod grades;
pub mod logging;
pub mod selection;
