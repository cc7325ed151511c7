//! In-page anchor scrolling configuration.

use fonixx_common::{ScrollBehavior, ScrollBlock};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScrollConfig {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}
