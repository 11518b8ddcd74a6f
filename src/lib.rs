//! Small structured logger.
//!
//! A [`Logger`] renders every record as a comma separated list of hook
//! outputs followed by the message:
//!
//! ```text
//! time=2021-03-04 05:06:07,level=Warn,msg: Testing
//! ```
//!
//! Leveled records go through an [`Event`] and are filtered by a
//! [`Threshold`]. A `DEBUG` threshold lets every level through; any other
//! value only lets that exact level through.

pub mod error;
pub mod event;
pub mod hook;
pub mod level;
pub mod logger;
pub mod settings;
pub mod utils;

pub use error::{LogError, ParseLevelError};
pub use event::Event;
pub use hook::{FieldHook, Hook, Hooks, LevelHook, TimeHook};
pub use level::{global_threshold, prefix, set_global_threshold, Level, Threshold};
pub use logger::Logger;
pub use settings::Settings;
