//! Full transcripts of each scenario.

use std::io;

use pretty_assertions::assert_eq;
use primer_demo::{run, DemoConfig, DemoError};

const QUEUE: &str = "\
true
true
10 20 30 40 50
10
20
20 30 40 50
20 30 40 50 60
";

const LIST: &str = "\
List is Empty true
List size 0
List is Empty false
List size 4
40 -> 30 -> 20 -> 10
40 -> 30 -> 20 -> 10 -> 50 -> 60
100 -> 40 -> 130 -> 30 -> 110 -> 20 -> 10 -> 50 -> 60
100
40 -> 130 -> 30 -> 110 -> 20 -> 10 -> 50 -> 60
30
40 -> 130 -> 110 -> 20 -> 10 -> 50 -> 60
50
40 -> 130 -> 110 -> 20 -> 10 -> 60
5
Reversing the list:
60 -> 10 -> 20 -> 110 -> 130 -> 40
";

const SEARCH: &str = "\
2
-1
4
-1
";

const STACK: &str = "\
3
10,20,30
30
30
10,20
";

fn transcript(args: &[&str]) -> Result<String, DemoError> {
    let args = std::iter::once("primer-demo").chain(args.iter().copied());
    let config = DemoConfig::try_parse_from(args).expect("valid arguments");
    let mut out = Vec::new();
    run(&config, &mut out)?;
    Ok(String::from_utf8(out).expect("transcript is UTF-8"))
}

#[test]
fn queue_transcript() {
    assert_eq!(transcript(&["queue"]).unwrap(), QUEUE);
}

#[test]
fn list_transcript() {
    assert_eq!(transcript(&["list"]).unwrap(), LIST);
}

#[test]
fn search_transcript() {
    assert_eq!(transcript(&["search"]).unwrap(), SEARCH);
}

#[test]
fn stack_transcript() {
    assert_eq!(transcript(&["stack"]).unwrap(), STACK);
}

#[test]
fn all_scenarios_with_headers() {
    let expected = format!(
        "== queue ==\n{QUEUE}\n== list ==\n{LIST}\n== search ==\n{SEARCH}\n== stack ==\n{STACK}"
    );
    assert_eq!(transcript(&[]).unwrap(), expected);
    assert_eq!(transcript(&["all"]).unwrap(), expected);
}

#[test]
fn selected_order_is_kept() {
    let expected = format!("== stack ==\n{STACK}\n== search ==\n{SEARCH}");
    assert_eq!(transcript(&["stack", "search"]).unwrap(), expected);
}

#[test]
fn small_queue_drops_overflow() {
    // Capacity 3 keeps 10 20 30 and silently drops 40 and 50.
    let expected = "\
true
true
10 20 30
10
20
20 30
20 30 60
";
    assert_eq!(transcript(&["--capacity", "3", "queue"]).unwrap(), expected);
}

#[test]
fn large_queue_is_never_full() {
    let output = transcript(&["--capacity=8", "queue"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "false");
    assert_eq!(lines[6], "20 30 40 50 60");
}

#[test]
fn zero_capacity_is_rejected() {
    let err = transcript(&["--capacity", "0"]).unwrap_err();
    assert!(matches!(err, DemoError::Queue(_)));
    assert_eq!(err.to_string(), "invalid queue configuration");
}

/// Accepts a fixed number of bytes, then reports a closed pipe.
struct ShortPipe {
    remaining: usize,
}

impl io::Write for ShortPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"));
        }
        let accepted = buf.len().min(self.remaining);
        self.remaining -= accepted;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_mid_transcript() {
    let config = DemoConfig::default();
    let mut pipe = ShortPipe { remaining: 40 };

    let err = run(&config, &mut pipe).unwrap_err();
    assert!(matches!(&err, DemoError::Io(cause) if cause.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.to_string(), "failed to write demo output");
}
