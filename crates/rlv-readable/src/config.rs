use serde::{Deserialize, Serialize};

use crate::error::{ReadError, ReadResult};
use crate::observer::{HoursObserver, NoopObserver, TracingObserver};

/// Presentation settings for the readable view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Spaces per indentation level in exported transaction JSON.
    pub json_indent: usize,
    /// Whether tolerated coin-hour overflows are logged.
    pub warn_on_hours_overflow: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            json_indent: 2,
            warn_on_hours_overflow: true,
        }
    }
}

impl ViewConfig {
    /// Parse from TOML. Missing keys take their default.
    pub fn from_toml_str(s: &str) -> ReadResult<Self> {
        toml::from_str(s).map_err(|e| ReadError::Config(e.to_string()))
    }

    /// The observer readers should report tolerated overflows to.
    pub fn observer(&self) -> &'static dyn HoursObserver {
        if self.warn_on_hours_overflow {
            &TracingObserver
        } else {
            &NoopObserver
        }
    }
}
