pub mod datetime_format {
    use chrono::{DateTime, Local};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn format(date: &DateTime<Local>) -> String {
        date.format(FORMAT).to_string()
    }

    pub fn now() -> String {
        format(&Local::now())
    }
}

// Levels in settings files may be spelled out ("warn") or given as a raw number.
pub mod level_format {
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::level::Level;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Name(String),
        Value(i8),
    }

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match level.prefix() {
            "" if *level == Level::DISABLED => serializer.serialize_str("disabled"),
            "" => serializer.serialize_i8(level.as_i8()),
            name => serializer.serialize_str(&name.to_ascii_lowercase()),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Name(s) => s.parse::<Level>().map_err(serde::de::Error::custom),
            Repr::Value(v) => Ok(Level::from_i8(v)),
        }
    }
}
