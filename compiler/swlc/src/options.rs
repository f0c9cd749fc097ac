//! Command-line flags shared by all subcommands.

use swl_diagnostic::emitter::ColorMode;
use swl_diagnostic::DiagnosticConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    pub diagnostics: DiagnosticConfig,
}

/// Split `args` (everything after the subcommand) into options and the
/// input path. `-` names standard input.
pub fn parse_options(args: &[String]) -> Result<(Options, Option<String>), String> {
    let mut options = Options::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid color mode '{value}' (expected auto, always or never)"))?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.diagnostics.error_limit = value
                .parse()
                .map_err(|_| format!("invalid error limit '{value}'"))?;
        } else if arg == "--no-dedup" {
            options.diagnostics.deduplicate = false;
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(format!("unexpected extra argument '{arg}'"));
            }
            path = Some(arg.clone());
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
    }

    Ok((options, path))
}
