//! Console reporting for extraction runs

use crate::application::dto::ExtractionReport;
use crate::domain::entities::ExtractedArchive;
use crate::domain::repositories::WriteResult;

/// One line describing a written archive
pub fn archive_line(archive: &ExtractedArchive, result: &WriteResult) -> String {
    let mut line = format!(
        "Extracted {} ({}) from offset 0x{:08x}",
        result.saved_path.display(),
        archive.size_human(),
        archive.start()
    );

    if archive.is_truncated() {
        line.push_str(&format!(
            " [truncated: header declares {} bytes]",
            archive.declared_size()
        ));
    }

    line
}

/// Prints a written archive; usable directly as a progress callback
pub fn print_archive(archive: &ExtractedArchive, result: &WriteResult) {
    println!("{}", archive_line(archive, result));
}

/// Prints the end-of-run summary, including a zero count
pub fn print_summary(report: &ExtractionReport) {
    println!();
    print!("{}", report.summary());
}
