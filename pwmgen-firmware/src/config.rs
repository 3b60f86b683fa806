//! Panel configuration
//!
//! Generated by build.rs from panel.toml, already validated.

use pwmgen_core::config::{DisplayConfig, KeypadConfig, PanelConfig, PwmConfig};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));
