use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppConfig {
    pub config_path: PathBuf,
    pub log_root: PathBuf,
}

impl AppConfig {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() < 2 {
            return Err("usage: cweapons <weapons.yaml>".to_string());
        }
        let config_path = Path::new(&args[1]).to_path_buf();
        let log_root = std::env::var("CWEAPONS_LOG_ROOT")
            .ok()
            .and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            })
            .or_else(|| {
                config_path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self {
            config_path,
            log_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_requires_a_config_path() {
        let err = AppConfig::from_args(&["cweapons".to_string()]).expect_err("missing arg");
        assert!(err.contains("usage"));
    }

    #[test]
    fn log_root_defaults_next_to_the_config() {
        let config = AppConfig::from_args(&[
            "cweapons".to_string(),
            "/srv/game/weapons.yaml".to_string(),
        ])
        .expect("parse args");
        assert_eq!(config.config_path, PathBuf::from("/srv/game/weapons.yaml"));
        assert_eq!(config.log_root, PathBuf::from("/srv/game"));
    }
}
