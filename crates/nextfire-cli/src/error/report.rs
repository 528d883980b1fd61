//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use nextfire_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Target(e) => Report::new(e),
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            help = "Create nextfire.toml, add a \"nextfire\" field to package.json, or pass --config <path>",
            "Configuration error: {}",
            err
        ),
        ConfigError::InvalidFunctionName { .. } => miette::miette!(
            help = "Function names become JavaScript exports: start with a letter, `_` or `$`, then letters, digits, `_` or `$`",
            "Configuration error: {}",
            err
        ),
        ConfigError::UnsupportedFormat(_) => miette::miette!(
            help = "Supported config files are nextfire.toml and package.json",
            "Configuration error: {}",
            err
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn target_errors_keep_their_diagnostic_code() {
        let report = cli_error_to_miette(CliError::Target(nextfire_target::Error::ManifestNotFound {
            path: PathBuf::from(".next/routes-manifest.json"),
        }));

        let code = report.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("nextfire::target::manifest_not_found"));
        assert!(report.help().is_some());
    }

    #[test]
    fn config_errors_get_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::UnsupportedFormat(
            "yaml".to_string(),
        )));
        assert!(report.to_string().contains("unsupported configuration format: yaml"));
        assert!(report.help().is_some());
    }
}
