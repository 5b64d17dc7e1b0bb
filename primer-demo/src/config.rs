//! Command-line configuration for the demo runner.

use std::ffi::OsString;
use std::fmt;

use clap::{Parser, ValueEnum};
use primer_queue::{CircularQueue, QueueBuilder};

use crate::DemoError;

/// Queue capacity used when neither `--capacity` nor the environment sets one.
pub const DEFAULT_CAPACITY: usize = 5;

/// Environment variable consulted for the queue capacity when `--capacity`
/// is absent.
pub const CAPACITY_ENV: &str = "PRIMER_QUEUE_CAPACITY";

/// One scripted walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Fixed-capacity circular queue.
    Queue,
    /// Singly-linked list.
    List,
    /// Iterative and recursive binary search.
    Search,
    /// LIFO stack.
    Stack,
}

impl Scenario {
    /// Every scenario, in the order `all` runs them.
    pub const ALL: [Scenario; 4] = [
        Scenario::Queue,
        Scenario::List,
        Scenario::Search,
        Scenario::Stack,
    ];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Queue => "queue",
            Scenario::List => "list",
            Scenario::Search => "search",
            Scenario::Stack => "stack",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scenario name as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    /// The circular queue walkthrough.
    Queue,
    /// The linked list walkthrough.
    List,
    /// The binary search walkthrough.
    Search,
    /// The stack walkthrough.
    Stack,
    /// Every walkthrough, in the default order.
    All,
}

impl Selection {
    fn scenarios(self) -> &'static [Scenario] {
        match self {
            Selection::Queue => &[Scenario::Queue],
            Selection::List => &[Scenario::List],
            Selection::Search => &[Scenario::Search],
            Selection::Stack => &[Scenario::Stack],
            Selection::All => &Scenario::ALL,
        }
    }
}

/// Replays the walkthroughs for the primer data structures.
#[derive(Debug, Parser)]
#[command(name = "primer-demo", version, about)]
pub struct Cli {
    /// Number of slots in the queue built by the queue scenario.
    #[arg(long, env = "PRIMER_QUEUE_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Scenarios to run, in order. Runs all of them when omitted.
    #[arg(value_enum, ignore_case = true, value_name = "SCENARIO")]
    pub scenarios: Vec<Selection>,
}

/// Resolved demo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Capacity of the queue the queue scenario builds.
    pub capacity: usize,
    /// Scenarios to run, in order, without repeats.
    pub scenarios: Vec<Scenario>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            scenarios: Scenario::ALL.to_vec(),
        }
    }
}

/// Expands `all` in place and drops repeats, keeping first occurrences.
impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        let mut scenarios: Vec<Scenario> = Vec::with_capacity(Scenario::ALL.len());
        let selected = if cli.scenarios.is_empty() {
            &[Selection::All][..]
        } else {
            &cli.scenarios[..]
        };
        for scenario in selected.iter().flat_map(|selection| selection.scenarios()) {
            if !scenarios.contains(scenario) {
                scenarios.push(*scenario);
            }
        }

        Self {
            capacity: cli.capacity,
            scenarios,
        }
    }
}

impl DemoConfig {
    /// Parses a full argument list, program name first.
    ///
    /// `--capacity` falls back to [`CAPACITY_ENV`], then to
    /// [`DEFAULT_CAPACITY`]. A capacity of zero parses here and is rejected
    /// by [`DemoConfig::queue`].
    ///
    /// # Errors
    ///
    /// Returns the [`clap::Error`] for unknown arguments or scenarios and
    /// malformed capacities, and for `--help`/`--version`, whose rendered
    /// text it carries.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from)
    }

    /// Builds the queue the queue scenario drives.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Queue`] if the capacity is zero.
    pub fn queue<T>(&self) -> Result<CircularQueue<T>, DemoError> {
        Ok(QueueBuilder::new().capacity(self.capacity).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use primer_queue::QueueError;

    fn parse(args: &[&str]) -> Result<DemoConfig, clap::Error> {
        DemoConfig::try_parse_from(std::iter::once("primer-demo").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_runs_everything() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.scenarios, Scenario::ALL);
    }

    #[test]
    fn scenarios_in_given_order() {
        let config = parse(&["stack", "queue"]).unwrap();
        assert_eq!(config.scenarios, vec![Scenario::Stack, Scenario::Queue]);
    }

    #[test]
    fn scenario_names_ignore_case() {
        assert_eq!(parse(&["LIST"]).unwrap().scenarios, vec![Scenario::List]);
    }

    #[test]
    fn all_expands_and_repeats_drop() {
        let config = parse(&["search", "all", "search"]).unwrap();
        assert_eq!(
            config.scenarios,
            vec![Scenario::Search, Scenario::Queue, Scenario::List, Scenario::Stack]
        );
    }

    #[test]
    fn capacity_flag_forms() {
        assert_eq!(parse(&["--capacity", "8"]).unwrap().capacity, 8);
        assert_eq!(parse(&["--capacity=3", "queue"]).unwrap().capacity, 3);
    }

    #[test]
    fn double_dash_ends_options() {
        let config = parse(&["--", "queue"]).unwrap();
        assert_eq!(config.scenarios, vec![Scenario::Queue]);
    }

    #[test]
    fn help_wins_over_later_errors() {
        let err = parse(&["-h", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("SCENARIO"));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse(&["heap"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["--capacity"]).is_err());
        assert_eq!(
            parse(&["--capacity", "lots"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn zero_capacity_fails_at_queue_build() {
        let config = parse(&["--capacity", "0"]).unwrap();
        assert!(matches!(
            config.queue::<u32>(),
            Err(DemoError::Queue(QueueError::ZeroCapacity))
        ));
    }

    #[test]
    fn queue_uses_capacity() {
        let config = parse(&["--capacity", "9"]).unwrap();
        assert_eq!(config.queue::<u32>().unwrap().capacity(), 9);
    }

    #[test]
    fn display_matches_cli_name() {
        for scenario in Scenario::ALL {
            let selection = Selection::from_str(scenario.name(), false).unwrap();
            assert_eq!(selection.scenarios(), &[scenario]);
            assert_eq!(scenario.to_string(), scenario.name());
        }
    }
}
