use std::path::Path;
use std::fs;
use anyhow::{Context, Error};
use const_format::concatcp;
use serde::{Deserialize, Serialize};

use crate::hook::FieldHook;
use crate::level::Level;
use crate::logger::Logger;
use crate::utils::level_format;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");
const NAME: &'static str = env!("CARGO_PKG_NAME");
pub const APP_TAG: &'static str = concatcp!(NAME, " ", VERSION);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "level_format")]
    pub threshold: Level,
    pub app_tag: bool,
    pub fields: Vec<Field>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            threshold: Level::DEBUG,
            app_tag: false,
            fields: Vec::new(),
        }
    }
}

impl Settings {
    /// Adds the configured context hooks, app tag first, to `logger`.
    pub fn apply<W: std::io::Write>(&self, logger: Logger<W>) -> Logger<W> {
        let logger = if self.app_tag {
            logger.hook(FieldHook::new("app", APP_TAG))
        } else {
            logger
        };
        self.fields
            .iter()
            .fold(logger, |logger, f| logger.hook(FieldHook::new(&f.key, &f.value)))
    }
}

pub fn load_toml<T, P: AsRef<Path>>(path: P) -> Result<T, Error>
where
    for<'a> T: Deserialize<'a>,
{
    let s = fs::read_to_string(path.as_ref())
        .with_context(|| format!("can't read file {}", path.as_ref().display()))?;
    toml::from_str(&s)
        .with_context(|| format!("can't parse TOML content from {}", path.as_ref().display()))
        .map_err(Into::into)
}
