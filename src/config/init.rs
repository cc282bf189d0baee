use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{get_config_path, Config, GradingConfig, DEFAULT_CAP_GRADE_AT};
use crate::grading::extra_points::MAX_EXTRA_POINTS;
use crate::shell::Prompter;

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, it is offered as the save location.
/// Otherwise the user is offered the default config path.
pub fn run_init_wizard<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_path: Option<PathBuf>,
) -> Result<()> {
    prompter.say("")?;
    prompter.say("Grade Calculator Configuration Wizard")?;
    prompter.say("=====================================")?;
    prompter.say("")?;

    prompter.say("The grade cap is the highest final grade a student can get, extra points included.")?;
    let cap_grade_at =
        prompter.ask_number("Final grade cap", 0.01, 100.0, Some(DEFAULT_CAP_GRADE_AT))?;

    prompter.say("")?;
    prompter.say("Extra points are only applied with minimum attendance and every year's teacher approval.")?;
    let set_default = prompter.ask_yes_no("Set a default extra-points value?", Some(false))?;
    let default_extra_points = if set_default {
        Some(prompter.ask_number(
            &format!("Default extra points (0-{})", MAX_EXTRA_POINTS),
            0.0,
            MAX_EXTRA_POINTS,
            Some(1.0),
        )?)
    } else {
        None
    };

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    prompter.say("")?;
    let path_str = prompter.ask_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompter.ask_yes_no(
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            Some(false),
        )?;
        if !overwrite {
            prompter.say("Aborted.")?;
            return Ok(());
        }
    }

    let config = Config {
        grading: Some(GradingConfig {
            cap_grade_at: Some(cap_grade_at),
            default_extra_points,
        }),
    };
    save_config(&config_path, &config)?;

    prompter.say("")?;
    prompter.say(format!("Config written to {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "config written");

    Ok(())
}

/// Write config as YAML atomically, creating parent directories.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}
