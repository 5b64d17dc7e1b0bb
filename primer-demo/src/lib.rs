//! Console smoke tests for the primer data structures.
//!
//! Each scenario drives one structure through a fixed script and writes one
//! line per observation to a caller-supplied [`Write`](std::io::Write), so
//! the binary prints to stdout and tests capture into a `Vec<u8>`.
//!
//! ```
//! use primer_demo::{run, DemoConfig, Scenario};
//!
//! let config = DemoConfig {
//!     scenarios: vec![Scenario::Stack],
//!     ..DemoConfig::default()
//! };
//! let mut out = Vec::new();
//! run(&config, &mut out).unwrap();
//!
//! let transcript = String::from_utf8(out).unwrap();
//! assert!(transcript.contains("10,20,30"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod scenarios;

mod error;

pub use config::{DemoConfig, Scenario};
pub use error::DemoError;
pub use scenarios::run;
