//! # CLI Behavior
//!
//! This is **one possible UI client** for notables, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## One-shot Commands
//!
//! Running `notables` with no arguments defaults to `notables list`, the first
//! page of the unfiltered directory. `list`, `show` and `summary` each do one
//! thing and exit.
//!
//! ## The Shell
//!
//! `notables shell` reads commands from stdin (with line editing and history
//! on a terminal) and keeps state between them:
//! active filters, the current page, the selected personality, the display
//! language and the admin session. Summary requests run in the background and
//! are printed when they arrive, provided the person is still selected.
//!
//! ## Errors
//!
//! Errors the user can act on (rejected fields, missing ids, admin required,
//! summary failures) are printed with their localized label. Anything else is
//! printed as-is.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch and one-shot handlers
//! - `input`: Line sources for the shell (rustyline or piped stdin)
//! - `print`: Output formatting (lists, detail pages, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive session

mod commands;
mod input;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
