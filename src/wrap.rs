/// Token placed in front of every wrapped value.
pub const PREFIX: &str = "foo";

/// Separator placed on both sides of the wrapped value.
pub const SEPARATOR: char = ':';

/// Closing token of a wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suffix {
    #[default]
    Bar,
    Baz,
}

impl Suffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::Bar => "bar",
            Suffix::Baz => "baz",
        }
    }
}

/// Wrap `value` as `foo:<value>:<suffix>`.
pub fn wrap(value: &str, suffix: Suffix) -> String {
    let suffix = suffix.as_str();
    let mut out = String::with_capacity(PREFIX.len() + value.len() + suffix.len() + 2);
    out.push_str(PREFIX);
    out.push(SEPARATOR);
    out.push_str(value);
    out.push(SEPARATOR);
    out.push_str(suffix);
    out
}

/// Return `value` wrapped with `foo` and `bar`, e.g. `foo:x:bar`.
///
/// An empty value yields `foo::bar`.
pub fn foobar(value: &str) -> String {
    wrap(value, Suffix::Bar)
}

/// Same as [`foobar`] but closes with `baz`.
pub fn foobaz(value: &str) -> String {
    wrap(value, Suffix::Baz)
}
