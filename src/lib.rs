pub mod colors;
pub mod emit;
mod error;
pub mod file;
pub mod ini;
pub mod options;
mod output;

pub use colors::{should_use_colors, Colors, Tone};
pub use emit::{build_document, render, write_to, WILDCARD_SECTION};
pub use error::EmitError;
pub use file::{read_existing, resolve_target, write_file, EDITORCONFIG_FILE};
pub use ini::{Document, Section};
pub use options::{Field, OptionSet, Value, WILDCARD_FIELDS};
pub use output::{
    print_diff, Config, Destination, OutputContext, OutputMode, Outcome, RunResult,
};

use std::io;
use std::path::Path;

use tracing::debug;

/// Main entry point: render `options` and deliver them to the configured destination
pub fn run(
    options: &OptionSet,
    config: &Config,
    ctx: &OutputContext,
) -> Result<RunResult, EmitError> {
    let outcome = match &config.destination {
        Destination::Stdout => {
            debug!("destination: stdout");
            write_to(options, io::stdout().lock())?;
            Outcome::Printed
        }
        Destination::File(path) => emit_to_file(options, path, config, ctx)?,
    };

    output::print_outcome(&outcome, ctx);

    Ok(RunResult { outcome })
}

fn emit_to_file(
    options: &OptionSet,
    path: &Path,
    config: &Config,
    ctx: &OutputContext,
) -> Result<Outcome, EmitError> {
    let path = resolve_target(path);
    debug!(path = %path.display(), check_only = config.check_only, "destination: file");

    let generated = render(options);
    let existing = read_existing(&path)?;

    let up_to_date = existing.as_deref() == Some(generated.as_bytes());

    if ctx.mode == OutputMode::Diff && !up_to_date {
        let original = existing
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        print_diff(
            &path.display().to_string(),
            &original,
            &generated,
            &ctx.colors,
        );
    }

    let outcome = match existing {
        Some(_) if up_to_date => Outcome::Unchanged(path),
        _ if config.check_only => Outcome::Stale(path),
        Some(_) => {
            write_file(&path, &generated, config.force)?;
            Outcome::Updated(path)
        }
        None => {
            write_file(&path, &generated, config.force)?;
            Outcome::Created(path)
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_config(path: &Path, check_only: bool, force: bool) -> Config {
        Config {
            destination: Destination::File(path.to_path_buf()),
            check_only,
            force,
        }
    }

    fn quiet() -> OutputContext {
        OutputContext::new(OutputMode::Quiet, false)
    }

    #[test]
    fn test_run_creates_file_in_directory() {
        let dir = TempDir::new().unwrap();
        let options = OptionSet::default();

        let result = run(&options, &file_config(dir.path(), false, false), &quiet()).unwrap();

        let path = dir.path().join(".editorconfig");
        assert_eq!(result.outcome, Outcome::Created(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&options));
        assert!(!result.has_problems());
    }

    #[test]
    fn test_run_unchanged_does_not_need_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        let options = OptionSet::default();
        fs::write(&path, render(&options)).unwrap();

        let result = run(&options, &file_config(&path, false, false), &quiet()).unwrap();
        assert_eq!(result.outcome, Outcome::Unchanged(path));
    }

    #[test]
    fn test_run_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, "root = false\n").unwrap();

        let result = run(
            &OptionSet::default(),
            &file_config(&path, false, false),
            &quiet(),
        );
        assert!(matches!(result, Err(EmitError::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "root = false\n");
    }

    #[test]
    fn test_run_force_updates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, "root = false\n").unwrap();
        let options = OptionSet {
            indent_size: 2,
            ..Default::default()
        };

        let result = run(&options, &file_config(&path, false, true), &quiet()).unwrap();
        assert_eq!(result.outcome, Outcome::Updated(path.clone()));
        assert!(fs::read_to_string(&path)
            .unwrap()
            .contains("indent_size = 2\n"));
    }

    #[test]
    fn test_run_force_replaces_non_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, [0xff, 0xfe, b'[', b'*', b']', b'\n']).unwrap();
        let options = OptionSet::default();

        let result = run(&options, &file_config(&path, false, true), &quiet()).unwrap();
        assert_eq!(result.outcome, Outcome::Updated(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&options));
    }

    #[test]
    fn test_check_non_utf8_file_is_stale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, [0xffu8, 0xfe]).unwrap();

        let diff = OutputContext::new(OutputMode::Diff, false);
        let result = run(
            &OptionSet::default(),
            &file_config(&path, true, false),
            &diff,
        )
        .unwrap();
        assert_eq!(result.outcome, Outcome::Stale(path.clone()));
        assert_eq!(fs::read(&path).unwrap(), [0xffu8, 0xfe]);
    }

    #[test]
    fn test_run_into_new_directory_path() {
        let dir = TempDir::new().unwrap();
        let target = format!(
            "{}{}",
            dir.path().join("newdir").display(),
            std::path::MAIN_SEPARATOR
        );

        let result = run(
            &OptionSet::default(),
            &file_config(Path::new(&target), false, false),
            &quiet(),
        );
        assert!(matches!(result, Err(EmitError::MissingDirectory { .. })));
    }

    #[test]
    fn test_check_missing_file_is_stale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");

        let result = run(
            &OptionSet::default(),
            &file_config(&path, true, false),
            &quiet(),
        )
        .unwrap();
        assert!(result.has_problems());
        assert!(!path.exists());
    }

    #[test]
    fn test_check_differing_file_is_stale_and_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        fs::write(&path, "[*]\nindent_size = 8\n").unwrap();

        let result = run(
            &OptionSet::default(),
            &file_config(&path, true, true),
            &quiet(),
        )
        .unwrap();
        assert_eq!(result.outcome, Outcome::Stale(path.clone()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[*]\nindent_size = 8\n"
        );
    }

    #[test]
    fn test_check_up_to_date_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".editorconfig");
        let options = OptionSet {
            root: false,
            ..Default::default()
        };
        fs::write(&path, render(&options)).unwrap();

        let result = run(&options, &file_config(&path, true, false), &quiet()).unwrap();
        assert!(!result.has_problems());
    }
}
