// SPDX-License-Identifier: MPL-2.0
use chat_settings::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
chat-settings: language and notification settings

USAGE:
  chat-settings [OPTIONS]

OPTIONS:
  --lang <TAG>          Start with this language (e.g. fr, pt-BR)
  --config-dir <PATH>   Directory holding settings.toml
  --data-dir <PATH>     Directory holding the push subscription
  -h, --help            Print this help

ENVIRONMENT:
  CHAT_SETTINGS_CONFIG_DIR, CHAT_SETTINGS_DATA_DIR, RUST_LOG
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unknown arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chat_settings=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
