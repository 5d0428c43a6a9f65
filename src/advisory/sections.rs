use serde::{Deserialize, Serialize};

/// Broad category of an advisory section, inferred from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Warning,
    Tip,
    Schedule,
    Region,
    Water,
    Fertilizer,
    General,
}

impl SectionKind {
    /// Classify a section title by keyword. Earlier categories win.
    pub fn detect(title: &str) -> Self {
        let lower = title.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(&["warning", "risk", "alert", "caution"]) {
            SectionKind::Warning
        } else if has(&["tip", "advice", "recommend"]) {
            SectionKind::Tip
        } else if has(&["schedule", "timing", "application"]) {
            SectionKind::Schedule
        } else if has(&["region", "district", "odisha", "local"]) {
            SectionKind::Region
        } else if has(&["water", "irrigation", "moisture"]) {
            SectionKind::Water
        } else if has(&["fertilizer", "nutrient", "npk"]) {
            SectionKind::Fertilizer
        } else {
            SectionKind::General
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Warning => write!(f, "Warning"),
            SectionKind::Tip => write!(f, "Tip"),
            SectionKind::Schedule => write!(f, "Schedule"),
            SectionKind::Region => write!(f, "Region"),
            SectionKind::Water => write!(f, "Water"),
            SectionKind::Fertilizer => write!(f, "Fertilizer"),
            SectionKind::General => write!(f, "General"),
        }
    }
}

/// A titled block of advisory lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorySection {
    pub title: String,
    pub kind: SectionKind,
    pub content: Vec<String>,
}

impl AdvisorySection {
    fn new(title: String) -> Self {
        let kind = SectionKind::detect(&title);
        Self {
            title,
            kind,
            content: Vec::new(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == SectionKind::Warning
    }
}

/// Title for lines that appear before the first header.
pub const GENERAL_SECTION_TITLE: &str = "General Advice";

/// Strip a leading `<digits>.` and following whitespace, if present.
fn strip_number_prefix(s: &str) -> &str {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = s[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    s
}

fn strip_bullet(s: &str) -> &str {
    match s.chars().next() {
        Some(c @ ('-' | '•' | '*')) => s[c.len_utf8()..].trim_start(),
        _ => s,
    }
}

fn strip_bold(s: &str) -> &str {
    let s = s.strip_prefix("**").unwrap_or(s);
    s.strip_suffix("**").unwrap_or(s)
}

fn is_numbered_bold(line: &str) -> bool {
    let rest = strip_number_prefix(line);
    rest.len() != line.len() && rest.starts_with('*')
}

fn is_capitalized_label(line: &str) -> bool {
    let Some(body) = line.strip_suffix(':') else {
        return false;
    };
    let mut chars = body.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && body.len() > 1
        && chars.all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn is_header(line: &str) -> bool {
    (line.len() >= 4 && line.starts_with("**") && line.ends_with("**"))
        || line.starts_with('#')
        || (line.ends_with(':')
            && line.chars().count() < 80
            && !line.starts_with('-')
            && !line.starts_with('•'))
        || is_numbered_bold(line)
        || is_capitalized_label(line)
}

fn clean_title(line: &str) -> String {
    let t = strip_bold(line);
    let t = t.trim_start_matches('#').trim_start();
    let t = t.strip_suffix(':').unwrap_or(t);
    let t = if is_numbered_bold(t) {
        strip_number_prefix(t).trim_start_matches('*')
    } else {
        t
    };
    let t = t.trim_end_matches('*');
    let t = strip_number_prefix(t);
    t.trim().to_string()
}

fn clean_content(line: &str) -> String {
    let t = strip_bold(line);
    let t = strip_bullet(t);
    strip_number_prefix(t).trim().to_string()
}

/// Split advisory text into titled sections.
///
/// Headers are `**bold**` lines, `#` lines, numbered bold lines, or short
/// non-bullet lines ending in `:`. Lines before any header go to a
/// "General Advice" section. Sections without content are dropped.
pub fn parse_sections(text: &str) -> Vec<AdvisorySection> {
    let mut sections = Vec::new();
    let mut current: Option<AdvisorySection> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_header(line) {
            if let Some(done) = current.take() {
                if !done.content.is_empty() {
                    sections.push(done);
                }
            }
            current = Some(AdvisorySection::new(clean_title(line)));
            continue;
        }

        let cleaned = match current {
            Some(_) => clean_content(line),
            None => strip_number_prefix(strip_bullet(line)).trim().to_string(),
        };
        let section =
            current.get_or_insert_with(|| AdvisorySection::new(GENERAL_SECTION_TITLE.to_string()));
        if !cleaned.is_empty() {
            section.content.push(cleaned);
        }
    }

    if let Some(done) = current {
        if !done.content.is_empty() {
            sections.push(done);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kinds() {
        assert_eq!(SectionKind::detect("Risk Alerts"), SectionKind::Warning);
        assert_eq!(SectionKind::detect("Pro Tips"), SectionKind::Tip);
        assert_eq!(
            SectionKind::detect("Basal Application (At sowing)"),
            SectionKind::Schedule
        );
        assert_eq!(SectionKind::detect("Odisha notes"), SectionKind::Region);
        assert_eq!(SectionKind::detect("Water Management"), SectionKind::Water);
        assert_eq!(SectionKind::detect("NPK balance"), SectionKind::Fertilizer);
        assert_eq!(SectionKind::detect("Previous Crop Benefit"), SectionKind::General);
    }

    #[test]
    fn test_header_forms() {
        assert!(is_header("**Water Management:**"));
        assert!(is_header("## Pests"));
        assert!(is_header("Harvest:"));
        assert!(is_header("1. **Basal Application (At sowing):**"));
        assert!(!is_header("- Apply 50% of Urea"));
        assert!(!is_header("- Note:"));
        assert!(!is_header("Apply during active tillering."));
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("**Water Management:**"), "Water Management");
        assert_eq!(clean_title("## Pests"), "Pests");
        assert_eq!(
            clean_title("2. **First Top Dressing (21-25 days after sowing):**"),
            "First Top Dressing (21-25 days after sowing)"
        );
        assert_eq!(clean_title("Harvest:"), "Harvest");
    }

    #[test]
    fn test_parse_simple_text() {
        let text = "Check your field daily.\n\n**Risk Alerts:**\n- Heavy rain expected\n\n**Empty:**\n# Harvest\n1. Cut at maturity\n* Dry to 14% moisture";
        let sections = parse_sections(text);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, GENERAL_SECTION_TITLE);
        assert_eq!(sections[0].content, vec!["Check your field daily."]);
        assert_eq!(sections[1].title, "Risk Alerts");
        assert!(sections[1].is_warning());
        assert_eq!(sections[1].content, vec!["Heavy rain expected"]);
        assert_eq!(sections[2].title, "Harvest");
        assert_eq!(
            sections[2].content,
            vec!["Cut at maturity", "Dry to 14% moisture"]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("\n  \n").is_empty());
    }

    #[test]
    fn test_generated_advisory_structure() {
        use crate::advisory::generate_advisory;
        use crate::models::{AdvisoryRequest, SoilInput};
        use crate::reference::ReferenceData;

        let data = ReferenceData::builtin();
        let request = AdvisoryRequest {
            crop: "Rice".to_string(),
            variety: "Swarna".to_string(),
            district: "Cuttack".to_string(),
            farm_size_acres: 1.0,
            sowing_date: "2024-06-15".to_string(),
            irrigation_type: "Canal Irrigation".to_string(),
            previous_crop: "none".to_string(),
            soil: SoilInput::default(),
        };
        let sections = parse_sections(&generate_advisory(&request, data.crop("Rice")));
        let outline: Vec<String> = sections
            .iter()
            .map(|s| format!("{} | {} | {}", s.kind, s.title, s.content.len()))
            .collect();
        insta::assert_snapshot!(outline.join("\n"), @r"
        General | Optimal Growing Conditions | 3
        Schedule | Basal Application (At sowing) | 2
        General | First Top Dressing (21-25 days after sowing) | 2
        General | Second Top Dressing (40-45 days after sowing) | 2
        Tip | Region-Specific Tips for Cuttack | 3
        Warning | Risk Alerts | 1
        General | Previous Crop Benefit | 1
        Water | Water Management | 2
        ");
    }
}
