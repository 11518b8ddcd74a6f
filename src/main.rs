use anyhow::{format_err, Error};
use std::env;
use std::io;
use std::path::Path;

use hooklog::settings::{self, Settings};
use hooklog::{set_global_threshold, Level, Logger};

const SETTINGS_PATH: &str = "Settings.toml";

fn main() -> Result<(), Error> {
    let mut args = env::args().skip(1);

    let settings = match args.next() {
        Some(path) => settings::load_toml::<Settings, _>(&path)?,
        None if Path::new(SETTINGS_PATH).exists() => {
            settings::load_toml::<Settings, _>(SETTINGS_PATH)?
        }
        // The demo has always run with an Info threshold.
        None => Settings {
            threshold: Level::INFO,
            ..Settings::default()
        },
    };

    if let Some(extra) = args.next() {
        return Err(format_err!("unexpected argument: {}", extra));
    }

    let logger = settings.apply(Logger::new(io::stdout()));
    set_global_threshold(settings.threshold);

    for (event, msg) in [
        (logger.info(), "Testing"),
        (logger.info(), "Testing1"),
        (logger.warn(), "Testing"),
        (logger.warn(), "Testing1"),
        (logger.error(), "Testing"),
        (logger.error(), "Testing1"),
    ] {
        if let Err(err) = event.try_msg(msg) {
            eprintln!("Can't log {:?}: {:#}.", msg, err);
        }
    }

    Ok(())
}
