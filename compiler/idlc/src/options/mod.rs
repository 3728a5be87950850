//! Command-line option parsing.

use idl_diagnostic::emitter::ColorMode;
use idl_parse::OrdinalLimits;

/// Options shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub limits: OrdinalLimits,
    pub color: ColorMode,
    /// Emit diagnostics as JSON on stdout.
    pub json: bool,
    /// Input files, in command-line order.
    pub paths: Vec<String>,
}

/// Parse the arguments following the command name.
pub fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-field-ordinal=") {
            options.limits = options.limits.with_max_field(parse_ordinal(arg, value)?);
        } else if let Some(value) = arg.strip_prefix("--max-method-ordinal=") {
            options.limits = options.limits.with_max_method(parse_ordinal(arg, value)?);
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = value.parse()?;
        } else if arg == "--json" {
            options.json = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            options.paths.push(arg.clone());
        }
    }
    Ok(options)
}

fn parse_ordinal(arg: &str, value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("`{arg}`: expected a non-negative integer"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
