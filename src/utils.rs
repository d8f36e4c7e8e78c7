// src/utils.rs
use log::warn;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads hosts from a file, one per line, skipping blank lines.
pub fn read_hosts<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    collect_hosts(BufReader::new(file))
}

/// Whether stdin is a pipe or file rather than an interactive terminal.
pub fn stdin_is_piped() -> bool {
    !atty::is(atty::Stream::Stdin)
}

/// Read hosts from stdin, one per line.
pub fn read_stdin_hosts() -> Vec<String> {
    let stdin = io::stdin();
    let lines = stdin.lock().lines();
    let mut hosts = Vec::new();
    for line in lines {
        match line {
            Ok(line) => push_host(&mut hosts, &line),
            Err(e) => warn!("Skipping unreadable stdin line: {}", e),
        }
    }
    hosts
}

/// Trimmed, non-blank lines from `reader`.
pub fn collect_hosts<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut hosts = Vec::new();
    for line in reader.lines() {
        push_host(&mut hosts, &line?);
    }
    Ok(hosts)
}

fn push_host(hosts: &mut Vec<String>, line: &str) {
    let host = line.trim();
    if !host.is_empty() {
        hosts.push(host.to_string());
    }
}
