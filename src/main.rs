// SPDX-License-Identifier: MPL-2.0
use envelope_reveal::app::{self, Flags};
use envelope_reveal::domain::variant::Variant;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
envelope_reveal

USAGE:
  envelope_reveal [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --variant <NAME>        sunset or meadow
  --config-dir <DIR>      Directory holding settings.toml
  --event-log <FILE>      Export target for the interaction event log (key E)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        variant: opt_value::<Variant>(&mut args, "--variant"),
        config_dir: opt_value(&mut args, "--config-dir"),
        event_log: opt_value::<PathBuf>(&mut args, "--event-log"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

/// Reads an optional flag, logging and ignoring values that fail to parse.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(flag = key, %error, "invalid command-line value");
            None
        }
    }
}
