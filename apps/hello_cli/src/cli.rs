use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(version)]
#[command(about = "Print a greeting, optionally to someone by name")]
#[command(after_help = "Examples:\n  hello\n  hello Alice")]
pub struct Cli {
    /// Who to greet (an empty name falls back to the default greeting).
    /// Anything after the name is accepted and ignored.
    #[arg(
        value_name = "NAME",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, exiting on `--help`, `--version` or a
    /// clap error.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(literal_separator(args))
    }

    #[cfg(test)]
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(literal_separator(args))
    }

    pub fn name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Number of arguments after the name.
    pub fn ignored(&self) -> usize {
        self.args.len().saturating_sub(1)
    }
}

/// A leading `--` is a name like any other, so escape it with a second one
/// before clap consumes it as the end-of-options marker.
fn literal_separator<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(|first| first == "--") {
        args.insert(1, OsString::from("--"));
    }
    args
}
