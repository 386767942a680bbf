//! Line sources for the interactive shell.
//!
//! A terminal gets line editing and history from rustyline, driven on its own
//! thread. Piped input is read as plain lines so scripts see no prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::IsTerminal;
use std::sync::mpsc as std_mpsc;
use std::thread;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

const PROMPT: &str = "> ";

pub(super) struct Input {
    lines: mpsc::Receiver<String>,
    /// Present for the editor: the next prompt waits for this signal.
    ready: Option<std_mpsc::Sender<()>>,
}

impl Input {
    pub(super) fn from_stdin() -> Self {
        if std::io::stdin().is_terminal() {
            Self::editor()
        } else {
            Self::plain()
        }
    }

    fn plain() -> Self {
        let (tx, lines) = mpsc::channel(16);
        tokio::spawn(async move {
            let mut reader = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match reader.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(line).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "stopped reading stdin");
                        break;
                    }
                }
            }
        });
        Self { lines, ready: None }
    }

    // Runtime shutdown waits on spawn_blocking tasks; a pending readline must not block exit.
    fn editor() -> Self {
        let (tx, lines) = mpsc::channel(1);
        let (ready, wait) = std_mpsc::channel::<()>();
        thread::spawn(move || {
            let hand_off = |line: String| tx.blocking_send(line).is_ok() && wait.recv().is_ok();

            let mut editor = match DefaultEditor::new() {
                Ok(editor) => editor,
                Err(e) => {
                    warn!(error = %e, "line editor unavailable, reading plain lines");
                    for line in std::io::stdin().lines().map_while(|l| l.ok()) {
                        if !hand_off(line) {
                            break;
                        }
                    }
                    return;
                }
            };

            loop {
                match editor.readline(PROMPT) {
                    Ok(line) => {
                        if !line.trim().is_empty() {
                            let _ = editor.add_history_entry(line.as_str());
                        }
                        if !hand_off(line) {
                            break;
                        }
                    }
                    // Ctrl+C drops the current input.
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => break,
                    Err(e) => {
                        warn!(error = %e, "line editor failed");
                        break;
                    }
                }
            }
        });
        Self {
            lines,
            ready: Some(ready),
        }
    }

    /// The next line, or `None` once input is exhausted.
    pub(super) async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }

    /// Marks the last line as handled so the editor can prompt again.
    pub(super) fn line_done(&self) {
        if let Some(ready) = &self.ready {
            let _ = ready.send(());
        }
    }
}
