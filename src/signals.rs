use once_cell::sync::OnceCell;
use signal_hook::{consts::signal::*, iterator::Signals};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// The signals that request a graceful stop. Both lead to the same exit.
pub const TERMINATION_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

static WATCHER: OnceCell<()> = OnceCell::new();

/// Installs handlers for SIGINT and SIGTERM so that delivery is queued for
/// the program to observe instead of killing it. Returns the channel the
/// deliveries arrive on, one raw signal number per delivery.
///
/// Registration is process-wide and lives until the process exits. Must be
/// called before the identity announcement so a signal sent right after the
/// pid is read cannot be lost.
pub fn install_termination_watcher() -> Receiver<i32> {
    WATCHER
        .set(())
        .expect("termination watcher installed twice");

    let mut signals =
        Signals::new(TERMINATION_SIGNALS).expect("unable to create signal handler");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for signal in signals.forever() {
            if tx.send(signal).is_err() {
                break;
            }
        }
    });
    rx
}
