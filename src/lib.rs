//! Two tiny string utilities and the command-line shells around them.
//!
//! [`wrap`] embeds a value between the fixed `foo` and `bar`/`baz` tokens, and
//! [`greet`] interpolates a name into a greeting that can optionally be shouted.
//! Both are total pure functions.
//!
//! The [`command`] and [`runner`] modules hold the small framework the binaries
//! are built on: each utility is an [`argh`] command implementing
//! [`command::Utility`], and [`runner::run`] turns an argument list into an
//! exit code.

pub mod cli;
pub mod command;
pub mod greet;
pub mod runner;
pub mod wrap;

pub use greet::format_greeting;
pub use wrap::{foobar, foobaz};
