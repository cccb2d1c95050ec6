use crate::command::{ExitCode, Utility};
use crate::greet::{DEFAULT_NAME, format_greeting};
use crate::wrap::{Suffix, wrap};
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Print the first argument wrapped between foo and bar, separated by colons.
///
/// The value is taken verbatim: flag-like values such as `-x` are wrapped,
/// not parsed, and any further arguments are ignored.
pub struct Foobar {
    pub value: String,
}

/// Same as [`Foobar`] but closes with baz.
pub struct Foobaz {
    pub value: String,
}

fn first_arg(args: &[&str]) -> String {
    args.first().map(|s| s.to_string()).unwrap_or_default()
}

impl FromArgs for Foobar {
    fn from_args(_command_name: &[&str], args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self {
            value: first_arg(args),
        })
    }
}

impl FromArgs for Foobaz {
    fn from_args(_command_name: &[&str], args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self {
            value: first_arg(args),
        })
    }
}

impl Utility for Foobar {
    fn name() -> &'static str {
        "foobar"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        writeln!(stdout, "{}", wrap(&self.value, Suffix::Bar))?;
        Ok(0)
    }
}

impl Utility for Foobaz {
    fn name() -> &'static str {
        "foobaz"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        writeln!(stdout, "{}", wrap(&self.value, Suffix::Baz))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print a friendly greeting.
struct HelloworldArgs {
    #[argh(positional)]
    /// name to greet. Defaults to User.
    name: Option<String>,

    #[argh(switch, short = 's')]
    /// uppercase the greeting.
    shout: bool,
}

/// Greeting shell: `helloworld [name] [-s|--shout]`.
pub struct Helloworld {
    pub name: Option<String>,
    pub shout: bool,
}

/// `-5`, `-12`, `-.5`, `-3.25`: tokens read as a name rather than a flag.
fn is_negative_number(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match frac {
        None => !int.is_empty() && digits(int),
        Some(frac) => !frac.is_empty() && digits(int) && digits(frac),
    }
}

/// Move number-like tokens behind a `--` so argh treats them as positionals.
fn shield_negative_numbers<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let split = args.iter().position(|a| *a == "--").unwrap_or(args.len());
    let (before, after) = args.split_at(split);
    let after = after.get(1..).unwrap_or_default();

    let (numbers, mut out): (Vec<&str>, Vec<&str>) =
        before.iter().copied().partition(|a| is_negative_number(a));
    if !numbers.is_empty() || split < args.len() {
        out.push("--");
    }
    out.extend(numbers);
    out.extend_from_slice(after);
    out
}

impl FromArgs for Helloworld {
    fn from_args(command_name: &[&str], args: &[&str]) -> Result<Self, EarlyExit> {
        let args = shield_negative_numbers(args);
        let HelloworldArgs { name, shout } = HelloworldArgs::from_args(command_name, &args)?;
        Ok(Self { name, shout })
    }
}

impl Utility for Helloworld {
    fn name() -> &'static str {
        "helloworld"
    }

    fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        let name = self.name.as_deref().unwrap_or(DEFAULT_NAME);
        writeln!(stdout, "{}", format_greeting(name, self.shout))?;
        Ok(0)
    }
}
