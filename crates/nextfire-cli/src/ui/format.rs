//! Formatting utilities for sizes and the build summary.

use console::Term;
use nextfire_target::OutputSummary;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use nextfire_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Print the files a build wrote, with their sizes, to stderr.
pub fn print_output_summary(summary: &OutputSummary) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);
    let colors = colors_enabled();

    if colors {
        eprintln!("\n{}", "Deployment Summary".bold().underline());
    } else {
        eprintln!("\nDeployment Summary");
    }
    eprintln!("{}", rule);

    let mut total = 0;
    for file in &summary.files {
        let size = std::fs::metadata(file).map(|meta| meta.len()).unwrap_or(0);
        total += size;

        let name = file
            .strip_prefix(&summary.output_dir)
            .unwrap_or(file)
            .display()
            .to_string();
        if colors {
            eprintln!("  {} {} {}", "▸".blue(), name.bright_white().bold(), format_size(size).dimmed());
        } else {
            eprintln!("  ▸ {} {}", name, format_size(size));
        }
    }

    eprintln!("{}", rule);
    eprintln!(
        "  {} header rules, {} redirects, {} rewrites",
        summary.hosting.headers.len(),
        summary.hosting.redirects.len(),
        summary.hosting.rewrites.len()
    );
    eprintln!("  Total: {}", format_size(total));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }
}
