//! Build script for pwmgen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml and compiles it into the firmware

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pwmgen_core::config::PanelConfig;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate panel.toml, then write it out as a Rust constant
fn generate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the pwmgen-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: PanelConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid panel.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml failed validation                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&format!("{:?}", e))
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("panel_config.rs"), render_config(&config)).unwrap();

    println!("cargo:warning=panel.toml validated successfully");
}

/// Emit the configuration as a `const PANEL` expression
fn render_config(config: &PanelConfig) -> String {
    let mut out = String::new();
    writeln!(out, "// Generated from panel.toml by build.rs").unwrap();
    writeln!(out, "pub const PANEL: PanelConfig = PanelConfig {{").unwrap();
    writeln!(out, "    pwm: PwmConfig {{").unwrap();
    writeln!(out, "        clock_hz: {},", config.pwm.clock_hz).unwrap();
    writeln!(out, "        max_frequency_hz: {},", config.pwm.max_frequency_hz).unwrap();
    writeln!(
        out,
        "        default_frequency_hz: {},",
        config.pwm.default_frequency_hz
    )
    .unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "    keypad: KeypadConfig {{").unwrap();
    writeln!(out, "        layout: {:?},", config.keypad.layout).unwrap();
    writeln!(out, "        poll_interval_ms: {},", config.keypad.poll_interval_ms).unwrap();
    writeln!(out, "        settle_us: {},", config.keypad.settle_us).unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "    display: DisplayConfig {{").unwrap();
    writeln!(out, "        line_addresses: {:?},", config.display.line_addresses).unwrap();
    writeln!(out, "    }},").unwrap();
    writeln!(out, "}};").unwrap();
    out
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
