use std::env;
use std::io::{self, Write};
use std::process;

/// Writes the identity block: the decimal pid on one line, then every
/// argument in order, one per line. For an argv of n entries (invocation
/// name included) the block is exactly n + 1 lines.
pub fn write_identity<W: Write>(
    out: &mut W,
    pid: u32,
    args: impl IntoIterator<Item = String>,
) -> io::Result<()> {
    writeln!(out, "{}", pid)?;
    for arg in args {
        writeln!(out, "{}", arg)?;
    }
    Ok(())
}

/// Prints this process's pid and full argv to stdout and flushes, so the
/// spawning harness can read the block while the process is still waiting.
pub fn announce() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_identity(&mut out, process::id(), env::args())?;
    out.flush()
}
