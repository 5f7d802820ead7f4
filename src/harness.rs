use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// A spawned stub whose startup announcement has already been read.
///
/// The announcement is one pid line followed by one line per argv entry
/// (invocation name first). Reading it here means a `Stub` in hand is a
/// child that is alive, identified, and suspended waiting for a signal.
pub struct Stub {
    child: Child,
    announced_pid: Pid,
    announced_argv: Vec<String>,
}

impl Stub {
    /// Spawns `program` with `args`, stdout piped, and reads the full
    /// announcement: 1 pid line + 1 invocation-name line + one line per
    /// argument. Truncated or malformed announcements are errors.
    pub fn spawn<P: AsRef<Path>>(program: P, args: &[&str]) -> io::Result<Stub> {
        let mut child = Command::new(program.as_ref())
            .args(args)
            .stdout(Stdio::piped())
            .spawn()?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "child stdout not captured"))?;
        let mut lines = BufReader::new(stdout).lines();

        let pid_line = next_line(&mut lines)?;
        let announced_pid = pid_line.parse::<i32>().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected a pid line, got {:?}", pid_line),
            )
        })?;

        let mut announced_argv = Vec::with_capacity(args.len() + 1);
        for _ in 0..args.len() + 1 {
            announced_argv.push(next_line(&mut lines)?);
        }

        Ok(Stub {
            child,
            announced_pid: Pid::from_raw(announced_pid),
            announced_argv,
        })
    }

    /// The pid the stub printed for itself.
    pub fn announced_pid(&self) -> Pid {
        self.announced_pid
    }

    /// The pid the operating system reported at spawn time.
    pub fn spawned_pid(&self) -> Pid {
        Pid::from_raw(self.child.id() as i32)
    }

    /// The argv lines the stub echoed, invocation name included.
    pub fn announced_argv(&self) -> &[String] {
        &self.announced_argv
    }

    /// Sends the platform interrupt signal.
    pub fn interrupt(&self) -> io::Result<()> {
        self.send(Signal::SIGINT)
    }

    /// Sends the platform termination signal.
    pub fn terminate(&self) -> io::Result<()> {
        self.send(Signal::SIGTERM)
    }

    /// Sends an arbitrary signal to the stub.
    pub fn send(&self, sig: Signal) -> io::Result<()> {
        signal::kill(self.spawned_pid(), sig)
            .map_err(|errno| io::Error::from_raw_os_error(errno as i32))
    }

    /// Waits for the stub to exit.
    pub fn wait(&mut self) -> io::Result<ExitStatus> {
        self.child.wait()
    }

    /// Checks for exit without blocking.
    pub fn try_wait(&mut self) -> io::Result<Option<ExitStatus>> {
        self.child.try_wait()
    }

    /// Polls for exit until `limit` elapses. `None` means still running.
    pub fn wait_deadline(&mut self, limit: Duration) -> io::Result<Option<ExitStatus>> {
        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Stub {
    fn drop(&mut self) {
        // A stub that is still waiting must not outlive its harness.
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

fn next_line(lines: &mut io::Lines<BufReader<ChildStdout>>) -> io::Result<String> {
    lines.next().unwrap_or_else(|| {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "child closed stdout before finishing its announcement",
        ))
    })
}
