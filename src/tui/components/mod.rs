//! # TUI Components
//!
//! Building blocks shared by the screens.
//!
//! - `KeyHints`: stateless bottom bar, bindings passed in as props
//! - `DateInput`: stateful text field that emits `DateInputEvent`s
//!
//! Each component file carries its own state, event and render code, and
//! its own tests.

pub mod date_input;
pub mod key_hints;

pub use date_input::{DateInput, DateInputEvent};
pub use key_hints::{Hints, KeyHints, LIST_HINTS};
