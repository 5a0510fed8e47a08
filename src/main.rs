// SPDX-License-Identifier: MPL-2.0
use coffee_wallet::app::{self, paths, Flags, Screen};
use coffee_wallet::config::{self, Config};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
CoffeeWallet - coffee-shop loyalty wallet

USAGE:
    coffee_wallet [OPTIONS]

OPTIONS:
    --lang <LOCALE>       UI language (e.g. en-US, tr)
    --screen <SCREEN>     Start screen: map or wallet
    --config-dir <DIR>    Directory holding settings.toml
    --init-config         Write a default settings.toml and exit
    -h, --help            Print this help

ENVIRONMENT:
    COFFEE_WALLET_CONFIG_DIR   Config directory (overridden by --config-dir)
    RUST_LOG                   Log filter, e.g. coffee_wallet=debug
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let init_config = args.contains("--init-config");
    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let screen: Option<Screen> = args.opt_value_from_str("--screen").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --screen");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    if init_config {
        paths::init_cli_override(config_dir);
        match config::save(&Config::default()) {
            Ok(()) => {
                if let Some(path) = config::config_path() {
                    println!("{}", path.display());
                }
            }
            Err(err) => eprintln!("could not write settings.toml: {err}"),
        }
        return Ok(());
    }

    app::run(Flags {
        lang,
        screen,
        config_dir,
    })
}
