use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// How the wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    /// A termination signal arrived.
    Signaled,
    /// The deadline elapsed before any signal.
    TimedOut,
}

impl Stopped {
    /// The exit status the stub binaries report for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Stopped::Signaled => 0,
            Stopped::TimedOut => 1,
        }
    }
}

/// Blocks until a termination signal arrives on `signals` or, when a
/// `timeout` is given, until that much wall-clock time has elapsed —
/// whichever happens first. Exactly one outcome is consumed; the caller
/// exits, so a late loser is never observed.
pub fn wait_for_termination(signals: &Receiver<i32>, timeout: Option<Duration>) -> Stopped {
    match timeout {
        Some(limit) => match signals.recv_timeout(limit) {
            Ok(_) => Stopped::Signaled,
            Err(RecvTimeoutError::Timeout) => Stopped::TimedOut,
            // The watcher thread outlives every receiver.
            Err(RecvTimeoutError::Disconnected) => unreachable!(),
        },
        None => match signals.recv() {
            Ok(_) => Stopped::Signaled,
            Err(_) => unreachable!(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_hook::consts::signal::SIGINT;
    use std::sync::mpsc;
    use std::time::Instant;

    #[test]
    fn signal_wins_the_race() {
        let (tx, rx) = mpsc::channel();
        tx.send(SIGINT).unwrap();
        let stopped = wait_for_termination(&rx, Some(Duration::from_secs(5)));
        assert_eq!(stopped, Stopped::Signaled);
        assert_eq!(stopped.exit_code(), 0);
    }

    #[test]
    fn deadline_expiry_reports_timeout() {
        let (_tx, rx) = mpsc::channel::<i32>();
        let start = Instant::now();
        let stopped = wait_for_termination(&rx, Some(Duration::from_millis(50)));
        assert_eq!(stopped, Stopped::TimedOut);
        assert_eq!(stopped.exit_code(), 1);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn indefinite_wait_returns_on_signal() {
        let (tx, rx) = mpsc::channel();
        tx.send(SIGINT).unwrap();
        assert_eq!(wait_for_termination(&rx, None), Stopped::Signaled);
    }
}
