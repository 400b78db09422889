use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,
    /// display geometry & behavior
    pub display: Option<DisplayConfig>,
    /// countdown page options
    pub page: Option<PageConfig>,
    /// write a PPM snapshot of each presented frame here (debugging)
    pub snapshot: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub brightness: Option<u8>, // 0-255
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageConfig {
    /// Seconds the page holds the display before a forced redraw
    pub display_duration_secs: Option<u64>,
    /// Logo size in pixels; omitted = auto-fit to the logo region
    pub logo_size: Option<u32>,
    /// RGB text color triple; length-checked during validation
    pub text_color: Option<Vec<u8>>,
    /// Directory searched for a bundled logo
    pub asset_dir: Option<PathBuf>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "ringsdown", about = "Olympics countdown display", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub display_width: Option<u32>,
    #[arg(long)]
    pub display_height: Option<u32>,
    #[arg(long)]
    pub display_duration: Option<u64>,
    #[arg(long)]
    pub logo_size: Option<u32>,
    /// Write each presented frame as a PPM snapshot
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    load_with(cli)
}

/// Same as `load()` but with a pre-parsed CLI, so tests can drive it.
pub fn load_with(cli: Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/ringsdown/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/ringsdown/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/ringsdown.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["ringsdown.yaml", "config.yaml", "config/ringsdown.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    if src.snapshot.is_some()  { dst.snapshot = src.snapshot; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    match (&mut dst.page, src.page) {
        (None, Some(c)) => dst.page = Some(c),
        (Some(d), Some(s)) => merge_page(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()      { dst.width = src.width; }
    if src.height.is_some()     { dst.height = src.height; }
    if src.brightness.is_some() { dst.brightness = src.brightness; }
}

fn merge_page(dst: &mut PageConfig, src: PageConfig) {
    if src.display_duration_secs.is_some() { dst.display_duration_secs = src.display_duration_secs; }
    if src.logo_size.is_some()             { dst.logo_size = src.logo_size; }
    if src.text_color.is_some()            { dst.text_color = src.text_color; }
    if src.asset_dir.is_some()             { dst.asset_dir = src.asset_dir; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if cli.snapshot.is_some()  { cfg.snapshot = cli.snapshot.clone(); }

    if (cli.display_width.is_some() || cli.display_height.is_some()) && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.display_width.is_some()  { display.width = cli.display_width; }
        if cli.display_height.is_some() { display.height = cli.display_height; }
    }

    if (cli.display_duration.is_some() || cli.logo_size.is_some()) && cfg.page.is_none() {
        cfg.page = Some(PageConfig::default());
    }
    if let Some(page) = cfg.page.as_mut() {
        if cli.display_duration.is_some() { page.display_duration_secs = cli.display_duration; }
        if cli.logo_size.is_some()        { page.logo_size = cli.logo_size; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(display) = cfg.display.as_ref() {
        if let (Some(w), Some(h)) = (display.width, display.height) {
            if w == 0 || h == 0 {
                return Err(ConfigError::Validation("display width/height must be > 0".into()));
            }
        }
    }
    if let Some(page) = cfg.page.as_ref() {
        if let Some(color) = page.text_color.as_ref() {
            if color.len() != 3 {
                return Err(ConfigError::Validation("page text_color must be an RGB triple".into()));
            }
        }
        if page.logo_size == Some(0) {
            return Err(ConfigError::Validation("page logo_size must be > 0".into()));
        }
        if page.display_duration_secs == Some(0) {
            return Err(ConfigError::Validation("page display_duration_secs must be > 0".into()));
        }
    }
    Ok(())
}

/// Concrete page settings with defaults applied, as handed to the page.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub display_duration: Duration,
    pub logo_size: Option<u32>,
    pub text_color: Vec<u8>,
    pub asset_dir: PathBuf,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            display_duration: Duration::from_secs(15),
            logo_size: None,
            text_color: vec![255, 255, 255],
            asset_dir: PathBuf::from("./assets"),
        }
    }
}

impl PageSettings {
    pub fn from_config(cfg: &Config) -> Self {
        let mut settings = Self::default();
        if let Some(page) = cfg.page.as_ref() {
            if let Some(secs) = page.display_duration_secs {
                settings.display_duration = Duration::from_secs(secs);
            }
            if let Some(size) = page.logo_size {
                settings.logo_size = Some(size);
            }
            if let Some(color) = page.text_color.as_ref() {
                settings.text_color = color.clone();
            }
            if let Some(dir) = page.asset_dir.as_ref() {
                settings.asset_dir = dir.clone();
            }
        }
        settings
    }

    /// Text color as an Rgb888, white when the triple is malformed.
    pub fn text_color_rgb(&self) -> Rgb888 {
        match self.text_color.as_slice() {
            [r, g, b] => Rgb888::new(*r, *g, *b),
            _ => Rgb888::new(255, 255, 255),
        }
    }
}
