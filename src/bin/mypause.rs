/*
 * mypause.rs - A stub process for testing a spawning harness.
 *
 * usage: mypause [arg ...]
 * Prints its own pid and argv, then waits indefinitely for SIGINT or
 * SIGTERM. Exits 0 when signaled; never exits on its own.
 */

use procstub::announce::announce;
use procstub::signals::install_termination_watcher;
use procstub::wait::wait_for_termination;
use std::process;

fn main() {
    let signals = install_termination_watcher();

    announce().unwrap();

    let stopped = wait_for_termination(&signals, None);
    process::exit(stopped.exit_code());
}
