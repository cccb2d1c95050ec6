use crate::command::{ExitCode, Utility};
use anyhow::Result;
use argh::EarlyExit;
use std::io::Write;
use tracing::debug;

/// Parse `args` (without the program name) as `T` and execute it.
///
/// `--help` output goes to `stdout` with exit code 0. Invalid arguments are
/// reported on `stderr` after the usage text and before a hint to run
/// `--help`, and yield 1.
/// Only failures writing to the streams are returned as errors.
pub fn run<T: Utility>(
    args: &[&str],
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<ExitCode> {
    let name = T::name();
    debug!(utility = name, argc = args.len(), "parsing arguments");

    let code = match T::from_args(&[name], args) {
        Ok(cmd) => cmd.execute(stdout)?,
        Err(EarlyExit { output, status }) => match status {
            Ok(()) => {
                writeln!(stdout, "{}", output)?;
                0
            }
            Err(()) => {
                if let Err(EarlyExit { output: usage, .. }) = T::from_args(&[name], &["--help"]) {
                    writeln!(stderr, "{}", usage)?;
                }
                writeln!(stderr, "{}", output)?;
                writeln!(stderr, "Run {} --help for more information.", name)?;
                1
            }
        },
    };
    stdout.flush()?;

    debug!(utility = name, code, "finished");
    Ok(code)
}

/// Run `T` against the process arguments and the real standard streams.
pub fn run_from_env<T: Utility>() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run::<T>(&args, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}

/// Install the stderr log subscriber used by the binaries.
///
/// Honors `RUST_LOG`; defaults to `warn` so normal runs print nothing extra.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Entry point shared by the binaries: run `T` and exit with its code.
pub fn main<T: Utility>() -> ! {
    init_tracing();
    let code = match run_from_env::<T>() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", T::name(), e);
            1
        }
    };
    std::process::exit(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    #[derive(FromArgs)]
    /// Test utility echoing its single value.
    struct Sample {
        #[argh(positional)]
        /// value to print
        value: Option<String>,

        #[argh(switch, short = 'f')]
        /// fail with exit code 3
        fail: bool,
    }

    impl Utility for Sample {
        fn name() -> &'static str {
            "sample"
        }

        fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
            writeln!(stdout, "{}", self.value.unwrap_or_default())?;
            Ok(if self.fail { 3 } else { 0 })
        }
    }

    fn run_sample(args: &[&str]) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run::<Sample>(args, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_executes_parsed_command() {
        let (code, out, err) = run_sample(&["abc"]);
        assert_eq!(code, 0);
        assert_eq!(out, "abc\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_passes_through_exit_code() {
        let (code, out, _) = run_sample(&["abc", "-f"]);
        assert_eq!(code, 3);
        assert_eq!(out, "abc\n");
    }

    #[test]
    fn test_run_help_goes_to_stdout() {
        let (code, out, err) = run_sample(&["--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("Usage: sample"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_unknown_flag_goes_to_stderr() {
        let (code, out, err) = run_sample(&["--nope"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Usage: sample"));
        assert!(err.contains("--nope"));
        assert!(err.contains("Run sample --help for more information."));
    }

    #[test]
    fn test_run_extra_positional_is_rejected() {
        let (code, out, err) = run_sample(&["a", "b"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("Usage: sample"));
    }

    #[test]
    fn test_run_write_failure_is_an_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut err = Vec::new();
        assert!(run::<Sample>(&["x"], &mut Broken, &mut err).is_err());
    }
}
