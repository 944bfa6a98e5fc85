use crate::app::error::ScanError;
use crate::app::formatter::OutputGenerator;
use crate::app::models::{FileRecord, RunSummary, ScanConfig};
use crate::app::scanner::Scanner;
use crate::app::selector::is_selected;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Owns the output stream for one run and counts the records written to it.
pub struct BundleWriter<W: Write> {
    out: W,
    matched_count: usize,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            matched_count: 0,
        }
    }

    pub fn write_banner(&mut self, config: &ScanConfig) -> io::Result<()> {
        self.out.write_all(OutputGenerator::banner(config).as_bytes())
    }

    /// Writes the whole block in one call so a record is never split by a successful partial write.
    pub fn write_record(&mut self, record: &FileRecord) -> io::Result<()> {
        self.out
            .write_all(OutputGenerator::record(record).as_bytes())?;
        self.matched_count += 1;
        Ok(())
    }

    pub fn finish(mut self, config: &ScanConfig) -> io::Result<RunSummary> {
        let summary = RunSummary {
            matched_count: self.matched_count,
        };
        self.out
            .write_all(OutputGenerator::summary(config, &summary).as_bytes())?;
        self.out.flush()?;
        Ok(summary)
    }
}

/// Walks the root, writes every selected file to the output file and returns the summary.
///
/// The output file is truncated up front. Errors on the output stream abort the run; read
/// failures on source files are written inline unless `config.strict` is set.
pub fn run_scan(config: &ScanConfig) -> Result<RunSummary, ScanError> {
    let output_error = |source: io::Error| ScanError::Output {
        path: config.output_path.clone(),
        source,
    };

    let file = File::create(&config.output_path).map_err(output_error)?;
    let mut writer = BundleWriter::new(BufWriter::new(file));
    writer.write_banner(config).map_err(output_error)?;

    for listing in Scanner::new(config).walk() {
        for name in listing.file_names {
            let path = listing.dir.join(&name);

            if path == config.output_path {
                log::debug!("Skipping the output file itself");
                continue;
            }
            if !is_selected(&name.to_string_lossy(), config) {
                continue;
            }

            let record = match FileRecord::read(&config.root, path) {
                FileRecord {
                    absolute_path,
                    body: Err(source),
                    ..
                } if config.strict => {
                    return Err(ScanError::SourceRead {
                        path: absolute_path,
                        source,
                    });
                }
                record => record,
            };

            writer.write_record(&record).map_err(output_error)?;
        }
    }

    writer.finish(config).map_err(output_error)
}
