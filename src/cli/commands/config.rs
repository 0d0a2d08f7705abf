//! Show or initialize the global config

use cardcheck::config::GlobalConfig;
use cardcheck::output::{OperationResult, OutputMode};

/// Show the config path and effective values, optionally writing defaults
pub fn config(current: &GlobalConfig, init: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = GlobalConfig::config_path();

    if init {
        let message = if path.exists() {
            format!("Config already exists at {}", path.display())
        } else {
            GlobalConfig::default().save()?;
            format!("Created {}", path.display())
        };
        OperationResult {
            success: true,
            message,
        }
        .render(mode);
        return Ok(());
    }

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "path": path.display().to_string(),
                "output": {
                    "json": current.output.json,
                    "mask": current.output.mask,
                }
            })
        );
    } else {
        println!("Config file: {}", path.display());
        println!("  output.json = {}", current.output.json);
        println!("  output.mask = {}", current.output.mask);
    }

    Ok(())
}
