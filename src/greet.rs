/// Name used when none is given on the command line.
pub const DEFAULT_NAME: &str = "User";

const GREETING: &str = "Hello, ";

/// Return a greeting for `name`.
///
/// If `shout` is set the whole greeting is uppercased using full Unicode case
/// mapping, so the result may be longer than the input (`ß` becomes `SS`).
pub fn format_greeting(name: &str, shout: bool) -> String {
    let greeting = format!("{GREETING}{name}");
    if shout {
        greeting.to_uppercase()
    } else {
        greeting
    }
}
