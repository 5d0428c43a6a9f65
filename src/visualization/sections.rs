use colored::Colorize;

use crate::advisory::{parse_sections, AdvisorySection, SectionKind};

fn section_title(section: &AdvisorySection) -> String {
    match section.kind {
        SectionKind::Warning => format!("! {}", section.title).bold().red().to_string(),
        SectionKind::Tip => section.title.bold().yellow().to_string(),
        SectionKind::Water => section.title.bold().blue().to_string(),
        SectionKind::Schedule | SectionKind::Fertilizer => section.title.bold().green().to_string(),
        SectionKind::Region | SectionKind::General => section.title.bold().to_string(),
    }
}

/// Format advisory text as titled sections, warning sections first.
pub fn format_advisory_sections(advisory: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Farming Advisory".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let sections = parse_sections(advisory);
    if sections.is_empty() {
        output.push_str("  No advisory available.\n");
        return output;
    }

    let (warnings, others): (Vec<_>, Vec<_>) = sections.iter().partition(|s| s.is_warning());
    for section in warnings.into_iter().chain(others) {
        output.push_str(&format!("\n{}\n", section_title(section)));
        for line in &section.content {
            output.push_str(&format!("  - {line}\n"));
        }
    }
    output
}

/// Print the advisory sections.
pub fn print_advisory_sections(advisory: &str) {
    print!("{}", format_advisory_sections(advisory));
}
