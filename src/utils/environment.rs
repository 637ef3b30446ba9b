use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "SHOPPING_VOICE_CONFIG";

const APP_DIR_NAME: &str = "shopping-voice";
const CONFIG_FILENAME: &str = "config.json";

/// Resolve the config file path: `$SHOPPING_VOICE_CONFIG`, else the platform config dir
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_get_config_path_env_override_and_default() {
        // Save original value
        let original = env::var(CONFIG_ENV_VAR).ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. Only this test touches SHOPPING_VOICE_CONFIG
        // 2. We restore the original value afterwards
        unsafe {
            env::set_var(CONFIG_ENV_VAR, "/tmp/custom-config.json");
        }
        let path = get_config_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom-config.json"));

        unsafe {
            env::remove_var(CONFIG_ENV_VAR);
        }
        if let Ok(path) = get_config_path() {
            assert!(path.ends_with("shopping-voice/config.json"));
        }

        // Restore original value
        if let Some(value) = original {
            unsafe {
                env::set_var(CONFIG_ENV_VAR, value);
            }
        }
    }
}
