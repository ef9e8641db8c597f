// SPDX-License-Identifier: MPL-2.0
use portfolio_i18n::config;
use portfolio_i18n::error::{Error, Result};
use portfolio_i18n::i18n::I18n;
use portfolio_i18n::logging;
use portfolio_i18n::paths;
use portfolio_i18n::storage::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
portfolio-i18n

Resolves the portfolio language, optionally changes it, and prints translations.

USAGE:
  portfolio-i18n [OPTIONS] [KEY...]

OPTIONS:
  --lang <es|en>        Persist and switch to this language
  --data-dir <DIR>      Directory holding the preference store
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print help

With no KEY, every key of the active catalog is printed.
";

struct Flags {
    lang: Option<String>,
    data_dir: Option<String>,
    config_dir: Option<String>,
    keys: Vec<String>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        keys: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    }))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::InvalidLocale(_)) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(flags: Flags) -> Result<()> {
    let cli_data_dir = flags.data_dir.clone().map(PathBuf::from);
    paths::init_cli_overrides(flags.data_dir, flags.config_dir)?;

    let (config, warning) = config::load();
    logging::init(config.logging.filter_or_default());

    let mut store = match cli_data_dir.or(config.storage.data_dir) {
        Some(dir) => FileStore::open_in(Some(dir))?,
        None => FileStore::open()?,
    };
    let mut i18n = I18n::new(&store)?;

    if let Some(key) = warning {
        tracing::warn!("{}", i18n.tr(&key));
    }

    if let Some(lang) = flags.lang {
        if let Err(err) = i18n.set_locale(&mut store, &lang) {
            eprintln!(
                "error: {}",
                i18n.tr_with_args(err.i18n_key(), &[("locale", lang.as_str())])
            );
            return Err(err);
        }
    }

    println!("locale = {}", i18n.current_locale());

    let keys: Vec<String> = if flags.keys.is_empty() {
        i18n.catalogs()
            .get(i18n.current_locale())
            .map(|catalog| catalog.key_paths().map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        flags.keys
    };

    for key in keys {
        println!("{key} = {}", i18n.tr(&key));
    }

    Ok(())
}
