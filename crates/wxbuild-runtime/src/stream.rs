//! Streaming child output to the terminal under a spinner.

use std::io::{BufRead, BufReader, Read};
use std::process::Stdio;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use wxbuild_core::{CommandSpec, CommandStatus, RunnerError};

use crate::runner::{build_command, spawn_error};

const TICK: Duration = Duration::from_millis(100);

/// Which pipe a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    Stdout,
    Stderr,
}

/// Spinner shown while `spec` runs, or a hidden bar.
pub(crate) fn spinner_for(spec: &CommandSpec, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Running {}...", spec.display_name()));
    pb
}

/// Print a line on the stream it was read from.
pub(crate) fn print_line(source: Source, line: &str) {
    match source {
        Source::Stdout => println!("{line}"),
        Source::Stderr => eprintln!("{line}"),
    }
}

/// Run `spec` and hand every output line to `emit` as it arrives.
///
/// The spinner is suspended around each `emit` call, so lines are written
/// whether or not the bar is drawn.
pub(crate) fn stream_child(
    spec: &CommandSpec,
    pb: &ProgressBar,
    mut emit: impl FnMut(Source, &str),
) -> Result<CommandStatus, RunnerError> {
    let mut child = build_command(spec)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(spec, e))?;

    let (tx, rx) = mpsc::channel();
    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, Source::Stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, Source::Stderr, tx);
    } else {
        drop(tx);
    }

    // Both readers hang up once the child closes its pipes.
    loop {
        match rx.recv_timeout(TICK) {
            Ok((source, line)) => pb.suspend(|| emit(source, &line)),
            Err(RecvTimeoutError::Timeout) => pb.tick(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let status = child.wait().map_err(|e| RunnerError::Spawn {
        program: spec.program.clone(),
        source: e,
    })?;
    pb.finish_and_clear();

    Ok(CommandStatus {
        code: status.code(),
    })
}

/// Read `source` to EOF, sending each line decoded lossily.
///
/// The pipe is drained even after the receiver is gone so the child never
/// blocks or dies writing to it.
fn forward_lines<R: Read + Send + 'static>(
    source: R,
    kind: Source,
    tx: Sender<(Source, String)>,
) {
    thread::spawn(move || {
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();
        let mut connected = true;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            if !connected {
                continue;
            }
            let line = String::from_utf8_lossy(trim_newline(&buf)).into_owned();
            connected = tx.send((kind, line)).is_ok();
        }
    });
}

fn trim_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
