// Tests for report, summary and table formatting

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Writer that keeps everything written to it for inspection
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let output = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (output, buffer)
}

fn enumeration_violation() -> Violation {
    Violation {
        path: "$.imageType".to_string(),
        node: NodeKind::Media,
        field: "imageType".to_string(),
        kind: ViolationKind::InvalidEnumerationValue {
            enumeration: "imageTypes".to_string(),
            admissible: vec!["floppy".to_string(), "iso".to_string()],
        },
        expected: "one of imageTypes".to_string(),
        actual: "\"dvd\"".to_string(),
    }
}

fn missing_violation() -> Violation {
    Violation {
        path: "$.name".to_string(),
        node: NodeKind::Media,
        field: "name".to_string(),
        kind: ViolationKind::MissingRequiredField,
        expected: "a value".to_string(),
        actual: "nothing".to_string(),
    }
}

#[test]
fn test_invalid_report_human() {
    let report = DocumentReport::new(
        PathBuf::from("boot.json"),
        NodeKind::Media,
        vec![enumeration_violation(), missing_violation()],
    );

    let formatted = format_report_human(&report, false);
    assert!(formatted.starts_with("✗ boot.json (Media): 2 violation(s)"));
    assert!(formatted.contains("1. InvalidEnumerationValue at $.imageType"));
    assert!(formatted.contains("Node: Media.imageType"));
    assert!(formatted.contains("Admissible imageTypes: floppy, iso"));
    assert!(formatted.contains("2. MissingRequiredField at $.name"));
}

#[test]
fn test_valid_report_human() {
    let report = DocumentReport::new(PathBuf::from("org.yaml"), NodeKind::Org, Vec::new());
    assert!(report.valid);
    assert_eq!(format_report_human(&report, false), "✓ org.yaml (Org) is valid\n");
}

#[test]
fn test_summary_counts() {
    let summary = ValidationSummary {
        documents: vec![
            DocumentReport::new(PathBuf::from("a.json"), NodeKind::Org, Vec::new()),
            DocumentReport::new(PathBuf::from("b.json"), NodeKind::Media, vec![missing_violation()]),
            DocumentReport::new(
                PathBuf::from("c.json"),
                NodeKind::Media,
                vec![missing_violation(), enumeration_violation()],
            ),
        ],
    };

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.invalid(), 2);
    assert_eq!(summary.violations(), 3);
    assert_eq!(
        format_summary_human(&summary),
        "2 of 3 document(s) invalid, 3 violation(s) in total\n"
    );
    assert_eq!(
        format_summary_human(&ValidationSummary::default()),
        "All 0 document(s) valid\n"
    );
}

#[test]
fn test_json_summary_is_machine_readable() {
    let summary = ValidationSummary {
        documents: vec![DocumentReport::new(
            PathBuf::from("boot.json"),
            NodeKind::Media,
            vec![enumeration_violation()],
        )],
    };

    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.report(&summary.documents[0]).unwrap();
    output.summary(&summary).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
    let violation = &value["documents"][0]["violations"][0];
    assert_eq!(value["documents"][0]["valid"], false);
    assert_eq!(violation["path"], "$.imageType");
    assert_eq!(violation["kind"]["type"], "InvalidEnumerationValue");
    assert!(value["documents"][0].get("document").is_none());
}

#[test]
fn test_quiet_human_output_hides_valid_documents() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output
        .report(&DocumentReport::new(PathBuf::from("ok.json"), NodeKind::Org, Vec::new()))
        .unwrap();
    output.info("checking").unwrap();
    output
        .report(&DocumentReport::new(
            PathBuf::from("bad.json"),
            NodeKind::Media,
            vec![missing_violation()],
        ))
        .unwrap();

    let contents = buffer.contents();
    assert!(!contents.contains("ok.json"));
    assert!(!contents.contains("checking"));
    assert!(contents.contains("bad.json"));
}

#[test]
fn test_table_alignment() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output
        .table(
            &["Table", "Values"],
            vec![
                vec!["imageTypes".to_string(), "floppy, iso".to_string()],
                vec!["ldapModes".to_string(), "CUSTOM, NONE, SYSTEM".to_string()],
            ],
        )
        .unwrap();

    let lines: Vec<String> = buffer.contents().lines().map(str::to_string).collect();
    assert_eq!(lines[0], "Table      │ Values");
    assert!(lines[2].starts_with("imageTypes │ floppy, iso"));
    assert!(lines[3].starts_with("ldapModes  │ CUSTOM"));
}

#[test]
fn test_yaml_format() {
    let formatted = OutputFormat::Yaml.format(&missing_violation()).unwrap();
    assert!(formatted.contains("$.name"));
    assert!(formatted.contains("type: MissingRequiredField"));
}
