use crate::app::models::{FileRecord, RunSummary, ScanConfig};

pub const SEPARATOR_WIDTH: usize = 80;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn banner(config: &ScanConfig) -> String {
        format!(
            "--- Starting scan in directory: {} ---\n--- Looking for file types/names: {} ---\n\n",
            config.root.display(),
            config.criteria.join(", ")
        )
    }

    /// `/path` followed by an underline one dash longer than the path.
    pub fn header(relative_path: &str) -> String {
        let underline = "-".repeat(relative_path.chars().count() + 1);
        format!("/{}\n{}\n", relative_path, underline)
    }

    /// A complete block: header, content or error marker, then the separator.
    pub fn record(record: &FileRecord) -> String {
        let mut out = Self::header(&record.relative_path);

        match &record.body {
            Ok(decoded) => {
                out.push_str(&decoded.text);
                if decoded.encoding.is_fallback() {
                    out.push_str(&format!(
                        "\n\n[!] Warning: File was not UTF-8, read as {}.\n\n",
                        decoded.encoding
                    ));
                }
            }
            Err(err) => out.push_str(&format!("\n\n[!] Error reading file: {}\n\n", err)),
        }

        out.push_str(&format!("\n\n{}\n\n", "=".repeat(SEPARATOR_WIDTH)));
        out
    }

    pub fn summary(config: &ScanConfig, summary: &RunSummary) -> String {
        if summary.matched_count == 0 {
            format!(
                "--- No files found matching the specified criteria in {} or its subdirectories (excluding ignored folders). ---\n",
                config.root.display()
            )
        } else {
            format!(
                "--- Scan complete. Found and saved {} files to {}. ---\n",
                summary.matched_count, config.output_name
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::SourceReadError;
    use crate::app::models::{DecodedText, Encoding};
    use std::io;
    use std::path::PathBuf;

    fn record(relative_path: &str, body: Result<DecodedText, SourceReadError>) -> FileRecord {
        FileRecord {
            absolute_path: PathBuf::from("/project").join(relative_path),
            relative_path: relative_path.to_string(),
            body,
        }
    }

    fn separator() -> String {
        format!("\n\n{}\n\n", "=".repeat(80))
    }

    #[test]
    fn test_header_underline_length() {
        assert_eq!(OutputGenerator::header("a.ts"), "/a.ts\n-----\n");
        assert_eq!(OutputGenerator::header("sub/b.tsx"), "/sub/b.tsx\n----------\n");
    }

    #[test]
    fn test_header_counts_characters_not_bytes() {
        assert_eq!(OutputGenerator::header("é.ts"), "/é.ts\n-----\n");
    }

    #[test]
    fn test_utf8_record_is_verbatim() {
        let text = OutputGenerator::record(&record(
            "a.ts",
            Ok(DecodedText {
                text: "const x = 1;\n".to_string(),
                encoding: Encoding::Utf8,
            }),
        ));

        assert_eq!(text, format!("/a.ts\n-----\nconst x = 1;\n{}", separator()));
    }

    #[test]
    fn test_fallback_record_has_warning() {
        let text = OutputGenerator::record(&record(
            "old.ts",
            Ok(DecodedText {
                text: "café".to_string(),
                encoding: Encoding::Latin1,
            }),
        ));

        assert_eq!(
            text,
            format!(
                "/old.ts\n-------\ncafé\n\n[!] Warning: File was not UTF-8, read as Latin-1.\n\n{}",
                separator()
            )
        );
    }

    #[test]
    fn test_error_record_keeps_separator() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let text = OutputGenerator::record(&record("locked.ts", Err(SourceReadError::Io(err))));

        assert!(text.starts_with("/locked.ts\n----------\n"));
        assert!(text.contains("\n\n[!] Error reading file: Permission denied\n\n"));
        assert!(text.ends_with(&separator()));
    }

    #[test]
    fn test_summary_lines() {
        let config = ScanConfig::new(PathBuf::from("/project"), &[".ts".to_string()], "out.txt");

        assert_eq!(
            OutputGenerator::summary(&config, &RunSummary { matched_count: 0 }),
            "--- No files found matching the specified criteria in /project or its subdirectories (excluding ignored folders). ---\n"
        );
        assert_eq!(
            OutputGenerator::summary(&config, &RunSummary { matched_count: 3 }),
            "--- Scan complete. Found and saved 3 files to out.txt. ---\n"
        );
    }

    #[test]
    fn test_banner_lists_criteria_in_order() {
        let criteria = vec![".tsx".to_string(), ".ts".to_string(), "package.json".to_string()];
        let config = ScanConfig::new(PathBuf::from("/project"), &criteria, "output.txt");

        assert_eq!(
            OutputGenerator::banner(&config),
            "--- Starting scan in directory: /project ---\n--- Looking for file types/names: .tsx, .ts, package.json ---\n\n"
        );
    }
}
