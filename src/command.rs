use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// A command-line utility known at compile time.
///
/// Utilities are parsed using the [`argh`] crate (`FromArgs`) and run
/// in-process against the provided output stream.
pub trait Utility: Sized + FromArgs {
    /// Canonical name of the utility, e.g. "foobar" or "helloworld".
    fn name() -> &'static str;

    /// Executes the utility, writing its result line to `stdout`.
    fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode>;
}
