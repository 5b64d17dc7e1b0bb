//! Scripted walkthroughs, one per data structure.
//!
//! Every observation is written as its own line. Missing queue and list
//! values print as `null`, an empty stack prints `stack is empty`, and a
//! search miss prints `-1`.

use std::fmt::Display;
use std::io::Write;

use primer_collections::{LinkedList, Stack};
use primer_search::{binary_search, recursive_binary_search};

use crate::{DemoConfig, DemoError, Scenario};

/// Runs every configured scenario in order.
///
/// When more than one scenario runs, each is preceded by a `== name ==`
/// header and separated from the previous one by a blank line.
///
/// # Errors
///
/// Returns [`DemoError::Queue`] if the configured capacity is rejected and
/// [`DemoError::Io`] if writing fails. Scenarios before the failing one have
/// already written their output.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let headers = config.scenarios.len() > 1;

    for (i, &scenario) in config.scenarios.iter().enumerate() {
        tracing::info!(%scenario, "running scenario");
        if headers {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "== {scenario} ==")?;
        }
        match scenario {
            Scenario::Queue => queue(config, out)?,
            Scenario::List => list(out)?,
            Scenario::Search => search(out)?,
            Scenario::Stack => stack(out)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Fills the queue with 10..=50, drains one and refills the freed slot.
///
/// # Errors
///
/// See [`run`].
pub fn queue<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let mut queue = config.queue::<i32>()?;

    writeln!(out, "{}", queue.is_empty())?;
    for value in [10, 20, 30, 40, 50] {
        queue.enqueue(value);
    }
    writeln!(out, "{}", queue.is_full())?;
    writeln!(out, "{queue}")?;
    writeln!(out, "{}", or_null(queue.dequeue()))?;
    writeln!(out, "{}", or_null(queue.peek()))?;
    writeln!(out, "{queue}")?;
    queue.enqueue(60);
    writeln!(out, "{queue}")?;
    Ok(())
}

/// Builds a list from both ends, edits it by position and value, then
/// reverses it.
///
/// # Errors
///
/// See [`run`].
pub fn list<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut list = LinkedList::new();

    writeln!(out, "List is Empty {}", list.is_empty())?;
    writeln!(out, "List size {}", list.len())?;
    for value in [10, 20, 30, 40] {
        list.prepend(value);
    }
    writeln!(out, "List is Empty {}", list.is_empty())?;
    writeln!(out, "List size {}", list.len())?;
    writeln!(out, "{list}")?;

    list.append(50);
    list.append(60);
    writeln!(out, "{list}")?;

    for (index, value) in [(0, 100), (2, 130), (4, 110)] {
        if let Err(err) = list.insert(index, value) {
            tracing::warn!(%err, "insert skipped");
        }
    }
    writeln!(out, "{list}")?;

    writeln!(out, "{}", or_null(list.remove_from(0)))?;
    writeln!(out, "{list}")?;
    writeln!(out, "{}", or_null(list.remove_from(2)))?;
    writeln!(out, "{list}")?;
    writeln!(out, "{}", or_null(list.remove_value(&50)))?;
    writeln!(out, "{list}")?;
    writeln!(out, "{}", or_minus_one(list.search(&60)))?;

    writeln!(out, "Reversing the list:")?;
    list.reverse();
    writeln!(out, "{list}")?;
    Ok(())
}

/// Searches for a present and an absent target with each variant.
///
/// # Errors
///
/// See [`run`].
pub fn search<W: Write>(out: &mut W) -> Result<(), DemoError> {
    // Not sorted, but the first midpoint is the target.
    let unsorted = [-5, 2, 10, 4, 6];
    writeln!(out, "{}", or_minus_one(binary_search(&unsorted, &10)))?;
    writeln!(out, "{}", or_minus_one(binary_search(&unsorted, &20)))?;

    let sorted = [-5, 2, 4, 6, 10];
    writeln!(out, "{}", or_minus_one(recursive_binary_search(&sorted, &10)))?;
    writeln!(out, "{}", or_minus_one(recursive_binary_search(&sorted, &20)))?;
    Ok(())
}

/// Pushes three values, then peeks and pops the top.
///
/// # Errors
///
/// See [`run`].
pub fn stack<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut stack = Stack::new();
    for value in [10, 20, 30] {
        stack.push(value);
    }

    writeln!(out, "{}", stack.len())?;
    writeln!(out, "{stack}")?;
    writeln!(out, "{}", or_empty_stack(stack.peek()))?;
    writeln!(out, "{}", or_empty_stack(stack.pop()))?;
    writeln!(out, "{stack}")?;
    Ok(())
}

fn or_null<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

fn or_minus_one(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}

fn or_empty_stack<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "stack is empty".to_string(), |v| v.to_string())
}
