//! Terminal output for the release run.

use console::style;

use crate::domain::ReleaseKind;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One-line description of the pending release
pub fn format_release_summary(kind: ReleaseKind, version: &str, fragment_count: usize) -> String {
    let noun = if fragment_count == 1 {
        "fragment"
    } else {
        "fragments"
    };
    format!(
        "{} release {} from {} changelog {}",
        kind, version, fragment_count, noun
    )
}

/// Show the fragments that will go into the release.
///
/// Lists up to 10 names, then a count of the rest.
pub fn display_fragments(fragments: &[String]) {
    println!("\n{}", style("Pending changelog fragments:").bold());
    for name in fragments.iter().take(10) {
        println!("  - {} ({})", name, ReleaseKind::classify(name));
    }
    if fragments.len() > 10 {
        println!("  ... and {} more", fragments.len() - 10);
    }
}
