use std::path::Path;

use match_timer_lib::TimerConfig;

use crate::Error;

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub length_s: Option<u16>,
    pub no_blink: bool,
}

pub fn from_yaml(text: &str) -> Result<TimerConfig, Error> {
    // an empty document means "all defaults"
    if text.trim().is_empty() {
        return Ok(TimerConfig::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<TimerConfig, Error> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;
            from_yaml(&text)?
        }
        None => TimerConfig::default(),
    };

    if let Some(length_s) = overrides.length_s {
        config.length_s = length_s;
    }
    if overrides.no_blink {
        config.blink = false;
    }

    if config.length_s == 0 {
        return Err(match_timer_lib::Error::ZeroLength.into());
    }
    log::debug!("timer config: {:?}", config);
    Ok(config)
}
