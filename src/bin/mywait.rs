/*
 * mywait.rs - A stub process for testing a spawning harness.
 *
 * usage: mywait [arg ...]
 * Prints its own pid and argv, then waits up to 10 seconds for SIGINT or
 * SIGTERM. Exits 0 when signaled, 1 when the timeout expires.
 */

use procstub::announce::announce;
use procstub::signals::install_termination_watcher;
use procstub::wait::wait_for_termination;
use std::process;
use std::time::Duration;

const WAIT_SECS: u64 = 10;

fn main() {
    // Register before printing anything: a harness may signal the moment
    // it reads the pid line.
    let signals = install_termination_watcher();

    announce().unwrap();

    let stopped = wait_for_termination(&signals, Some(Duration::from_secs(WAIT_SECS)));
    process::exit(stopped.exit_code());
}
