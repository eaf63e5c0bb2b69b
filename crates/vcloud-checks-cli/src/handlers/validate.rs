//! Validation command handler

use super::{load_tables, read_document};
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::{DocumentReport, OutputWriter, ValidationSummary};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use vcloud_checks::{DocumentValidator, SchemaValidator, ValidationConfig, ValidationMode};

/// Handle the validate command
#[instrument(skip_all, fields(files = args.files.len(), fail_fast = args.fail_fast))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("validate_command", &format!("{} file(s)", args.files.len()));
    let settings = &config.validation;

    let validation_config = ValidationConfig {
        mode: if args.fail_fast || settings.fail_fast {
            ValidationMode::FailFast
        } else {
            ValidationMode::CollectAll
        },
        max_errors: args.max_errors.unwrap_or(settings.max_errors),
        parallel: settings.parallel,
    };
    debug!(config = ?validation_config, "Resolved validation settings");

    let tables = load_tables(args.tables.as_deref().or(settings.tables.as_deref()))?;
    let validator = DocumentValidator::with_tables(Arc::new(tables)).with_parallel(validation_config.parallel);

    let progress = output.progress_bar(args.files.len() as u64, "Validating");
    let mut summary = ValidationSummary::default();

    for path in &args.files {
        if let Some(pb) = &progress {
            pb.set_message(path.display().to_string());
        }

        let node = read_document(path)?;
        let violations = match validator.validate_with_config(&node, &validation_config) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.violations,
        };

        if violations.is_empty() {
            info!(file = %path.display(), kind = %node.kind(), "Document is valid");
        } else {
            warn!(
                file = %path.display(),
                kind = %node.kind(),
                violations = violations.len(),
                "Document failed validation"
            );
        }

        let mut report = DocumentReport::new(path.clone(), node.kind(), violations);
        if args.detailed {
            let mut document = serde_json::to_value(&node)?;
            redaction::redact_json_value(&mut document);
            report.document = Some(document);
        }

        match &progress {
            Some(pb) => {
                pb.suspend(|| output.report(&report))?;
                pb.inc(1);
            }
            None => output.report(&report)?,
        }
        summary.documents.push(report);
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    output.summary(&summary)?;
    info!(
        total = summary.total(),
        invalid = summary.invalid(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Validation finished"
    );

    if summary.invalid() > 0 {
        return Err(Error::ValidationFailed {
            invalid: summary.invalid(),
            total: summary.total(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::cell::RefCell;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Buffer(Rc<RefCell<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn args(files: Vec<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            files,
            fail_fast: false,
            max_errors: None,
            tables: None,
            detailed: false,
        }
    }

    fn run(args: ValidateArgs, config: &Config) -> (Result<()>, serde_json::Value) {
        let buffer = Buffer::default();
        let mut output = OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(buffer.clone()));
        let result = handle_validate(args, config, &mut output);
        let text = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        let value = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(text.trim()).unwrap()
        };
        (result, value)
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_valid_and_invalid_documents() {
        let dir = TempDir::new().unwrap();
        let valid = write(&dir, "org.json", r#"{"kind": "Org", "name": "acme", "fullName": "Acme"}"#);
        let invalid = write(&dir, "task.yaml", "kind: Task\nname: deploy\nstatus: success\nprogress: 150\n");

        let (result, report) = run(args(vec![valid, invalid]), &Config::default());

        assert!(matches!(result, Err(Error::ValidationFailed { invalid: 1, total: 2 })));
        assert_eq!(report["documents"][0]["valid"], true);
        assert_eq!(report["documents"][1]["kind"], "Task");
        assert_eq!(report["documents"][1]["violations"][0]["path"], "$.progress");
    }

    #[test]
    fn test_fail_fast_and_max_errors() {
        let dir = TempDir::new().unwrap();
        let user = write(
            &dir,
            "user.json",
            r#"{"kind": "User", "name": "jdoe", "emailAddress": "jdoe", "storedVmQuota": -1, "deployedVmQuota": -1}"#,
        );

        let (_, collected) = run(args(vec![user.clone()]), &Config::default());
        let all = collected["documents"][0]["violations"].as_array().unwrap().len();
        assert!(all >= 2);

        let mut fail_fast = args(vec![user.clone()]);
        fail_fast.fail_fast = true;
        let (_, first) = run(fail_fast, &Config::default());
        assert_eq!(first["documents"][0]["violations"].as_array().unwrap().len(), 1);
        assert_eq!(
            first["documents"][0]["violations"][0],
            collected["documents"][0]["violations"][0]
        );

        let mut config = Config::default();
        config.validation.max_errors = 1;
        let (_, bounded) = run(args(vec![user]), &config);
        assert_eq!(bounded["documents"][0]["violations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_detailed_output_redacts_passwords() {
        let dir = TempDir::new().unwrap();
        let section = write(
            &dir,
            "section.json",
            r#"{"kind": "Section", "sectionType": "GuestCustomization",
                "adminPasswordEnabled": true, "adminPassword": "hunter22"}"#,
        );

        let mut detailed = args(vec![section]);
        detailed.detailed = true;
        let (result, report) = run(detailed, &Config::default());

        assert!(result.is_ok());
        assert_eq!(report["documents"][0]["document"]["adminPassword"], "***");
    }

    #[test]
    fn test_tables_override_from_config() {
        let dir = TempDir::new().unwrap();
        let media = write(
            &dir,
            "media.json",
            r#"{"kind": "Media", "name": "boot.flp", "imageType": "floppy", "size": 1474560}"#,
        );
        let tables = write(&dir, "tables.yaml", "imageTypes: [iso]\n");

        assert!(run(args(vec![media.clone()]), &Config::default()).0.is_ok());

        let mut config = Config::default();
        config.validation.tables = Some(tables);
        let (result, report) = run(args(vec![media]), &config);
        assert!(result.is_err());
        assert_eq!(
            report["documents"][0]["violations"][0]["kind"]["type"],
            "InvalidEnumerationValue"
        );
    }

    #[test]
    fn test_unreadable_document_aborts() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "broken.json", "{not json");

        let (result, _) = run(args(vec![broken]), &Config::default());
        assert!(matches!(result, Err(Error::InvalidDocument { .. })));
    }
}
