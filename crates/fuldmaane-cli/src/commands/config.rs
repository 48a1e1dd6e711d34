//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
    out: &mut dyn Write,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", path.display())?;
            if !path.exists() {
                writeln!(
                    out,
                    "{}",
                    formatter.info("Not created yet; run `fuldmaane config init`")
                )?;
            }
        }
        ConfigAction::Init { force } => init_config(path, force, formatter, out)?,
    }
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter, out: &mut dyn Write) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::NotPermitted(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    info!(path = %path.display(), "wrote default configuration");
    writeln!(
        out,
        "{}",
        formatter.success(&format!("Wrote {}", path.display()))
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Text, false);

        init_config(&path, false, &formatter, &mut Vec::new()).unwrap();
        assert!(path.exists());

        let again = init_config(&path, false, &formatter, &mut Vec::new());
        assert!(matches!(again, Err(CliError::NotPermitted(_))));

        init_config(&path, true, &formatter, &mut Vec::new()).unwrap();
    }

    #[test]
    fn test_show_prints_toml() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let mut out = Vec::new();
        execute_config(
            ConfigArgs {
                action: ConfigAction::Show,
            },
            &Config::default(),
            Path::new("unused.toml"),
            &formatter,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("timezone = \"Europe/Copenhagen\""));
        assert!(text.contains("locale = \"da\""));
        assert!(text.contains("[settings]"));
    }
}
