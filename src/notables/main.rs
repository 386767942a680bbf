//! # Notables CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/` and
//! this file only starts the runtime, invokes `cli::run()` and handles process
//! termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/notables/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and one-shot commands (commands.rs)       │
//! │  - Interactive browsing session (shell.rs)                  │
//! │  - Colored terminal output (print.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/notables/lib.rs)                              │
//! │  - DirectoryApi facade, commands, pure core, storage        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI owns every piece of UI state the library leaves to its caller: the
//! browse state (filters, page, selection), the admin session, and the
//! background summary tasks.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
