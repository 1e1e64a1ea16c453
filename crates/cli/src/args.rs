use std::ffi::OsString;

use acmewin_engine::parse_bool;

/// Flags of a command, and how clap declares each one.
///
/// The Go `flag` package accepts `-name` and `--name` alike, takes
/// `-name=value` for any flag, and lets boolean flags be switched off
/// with `-name=false`. Value-taking flags consume the next argument
/// verbatim, even when it starts with a dash.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    /// Declared with a long name (`--ts`).
    pub long: &'static [&'static str],
    /// Declared with a short name (`-o`).
    pub short: &'static [&'static str],
    pub takes_value: &'static [&'static str],
}

impl FlagSpec {
    /// Dashes clap expects in front of `name`, if the flag is known.
    fn clap_prefix(&self, name: &str) -> Option<&'static str> {
        if self.long.contains(&name) {
            Some("--")
        } else if self.short.contains(&name) {
            Some("-")
        } else {
            None
        }
    }

    fn wants_value(&self, name: &str) -> bool {
        self.takes_value.contains(&name)
    }
}

/// Rewrite Go-style flags into the form clap expects.
///
/// Unknown flags and malformed boolean values are passed through so clap
/// reports them as usage errors. The first argument (program name) and
/// everything after `--` are kept as is.
pub fn go_style_args<I, T>(args: I, spec: &FlagSpec) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.by_ref().take(1).collect();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        }

        let Some((name, value)) = split_flag(&arg) else {
            out.push(arg);
            continue;
        };
        let Some(prefix) = spec.clap_prefix(&name) else {
            out.push(arg);
            continue;
        };

        if spec.wants_value(&name) {
            match value {
                Some(value) => out.push(format!("{prefix}{name}={value}").into()),
                None => {
                    out.push(format!("{prefix}{name}").into());
                    // A bare value-taking flag swallows the next argument untouched.
                    out.extend(iter.next());
                }
            }
            continue;
        }

        match value.map(|v| parse_bool(v.as_bytes())) {
            None | Some(Some(true)) => out.push(format!("{prefix}{name}").into()),
            // Explicitly switched off: same as not giving the flag.
            Some(Some(false)) => {}
            Some(None) => out.push(arg),
        }
    }

    out
}

/// Split `-name`, `--name` or `-name=value` into name and inline value.
fn split_flag(arg: &OsString) -> Option<(String, Option<String>)> {
    let s = arg.to_str()?;
    let rest = s.strip_prefix("--").or_else(|| s.strip_prefix('-'))?;
    if rest.is_empty() || rest.starts_with('-') {
        return None;
    }

    Some(match rest.split_once('=') {
        Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
        None => (rest.to_owned(), None),
    })
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
