use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use zenith_radar::config::{SEED_VAR, SHOW_MARKERS_VAR, SIZE_VAR};

#[derive(Debug, Parser)]
#[command(name = "zenith-radar", version, about = "Zenith Airways station radar")]
pub struct CliArgs {
    /// Simulate the radar and print a summary instead of drawing it
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Scope size: small, medium or large (sm, md, lg)
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Hide aircraft markers
    #[arg(long = "hide-markers")]
    pub hide_markers: bool,

    /// Seed for reproducible blinking
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Sweep periods to simulate in headless mode
    #[arg(long, value_name = "N", default_value_t = 180)]
    pub ticks: u64,

    /// Deactivate after the simulated ticks, then simulate this much idle time
    #[arg(long = "then-idle-ms", value_name = "MS")]
    pub then_idle_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(size) = &self.size {
            std::env::set_var(SIZE_VAR, size);
        }
        if self.hide_markers {
            std::env::set_var(SHOW_MARKERS_VAR, "false");
        }
        if let Some(seed) = self.seed {
            std::env::set_var(SEED_VAR, seed.to_string());
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn defaults_simulate_one_full_rotation() {
        let args = CliArgs::parse_from(["zenith-radar"]);
        assert!(!args.headless);
        assert_eq!(args.ticks, 180);
        assert_eq!(args.then_idle_ms, None);
    }

    #[test]
    fn parses_headless_flags() {
        let args = CliArgs::parse_from([
            "zenith-radar",
            "--headless",
            "--json",
            "--size",
            "lg",
            "--seed",
            "7",
            "--ticks",
            "90",
            "--then-idle-ms",
            "50",
            "--hide-markers",
        ]);
        assert!(args.headless && args.json && args.hide_markers);
        assert_eq!(args.size.as_deref(), Some("lg"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.ticks, 90);
        assert_eq!(args.then_idle_ms, Some(50));
    }

    #[test]
    fn help_lists_options() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--hide-markers"));
    }
}
