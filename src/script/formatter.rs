use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Named formatting preset controlling the rewriting passes applied after
/// line classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Professional,
    Creative,
    Dramatic,
    Comedy,
    Default,
}

impl Style {
    /// Lenient lookup: an unrecognized name falls back to `Default` so a bad
    /// style choice never blocks formatting. The mismatch is logged.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "professional" => Style::Professional,
            "creative" => Style::Creative,
            "dramatic" => Style::Dramatic,
            "comedy" => Style::Comedy,
            "default" => Style::Default,
            other => {
                warn!("Unknown style '{}', falling back to default formatting", other);
                Style::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Creative => "creative",
            Style::Dramatic => "dramatic",
            Style::Comedy => "comedy",
            Style::Default => "default",
        }
    }
}

/// Dialogue line marker: uppercase name (possibly empty) followed by a colon
/// at the start of a line. The class excludes '.' so INT./EXT. headers that
/// contain colons never match.
static DIALOGUE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([A-Z0-9 ]*):[ \t]*").expect("dialogue marker regex"));

/// A whole line containing a scene-location marker. Classification uppercases
/// header lines, so case-sensitive INT./EXT. only occurs on headers.
static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([^\n]*(?:INT\.|EXT\.)[^\n]*)$").expect("header line regex"));

/// A header line together with the newlines that follow it.
static HEADER_LINE_AND_GAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([^\n]*(?:INT\.|EXT\.)[^\n]*)\n*").expect("header gap regex")
});

/// Turns raw multi-line text into a screenplay-styled string.
///
/// Each non-empty trimmed line is classified as a scene-location header
/// (contains INT. or EXT., case-insensitive; wins over the colon check),
/// a dialogue line (contains a colon) or an action line, emitted with
/// blank-line separators, then rewritten per `style`. Empty input yields
/// empty output.
pub fn format_script(text: &str, style: Style) -> String {
    let mut script = String::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let upper = line.to_uppercase();
        if upper.contains("INT.") || upper.contains("EXT.") {
            script.push_str("\n\n");
            script.push_str(&upper);
            script.push_str("\n\n");
        } else if let Some((name, dialogue)) = line.split_once(':') {
            script.push_str("\n\n");
            script.push_str(&name.trim().to_uppercase());
            script.push_str(": ");
            script.push_str(dialogue.trim());
            script.push_str("\n\n");
        } else {
            script.push_str("\n\n");
            script.push_str(line);
            script.push_str("\n\n");
        }
    }

    let script = match style {
        Style::Professional => space_out_headers(&indent_dialogue(&script)),
        Style::Creative => break_after_sentences(&script),
        Style::Dramatic => indent_dialogue(&break_after_sentences(&script)),
        Style::Comedy => tag_headers_comedy(&indent_dialogue(&break_after_sentences(&script))),
        Style::Default => single_blank_after_headers(&indent_dialogue(&script)),
    };

    script.trim().to_string()
}

/// Fixed padding after the `NAME:` marker. An empty name still indents.
fn indent_dialogue(script: &str) -> String {
    DIALOGUE_MARKER.replace_all(script, "$1:    ").into_owned()
}

/// Extra blank line before every scene-location header.
fn space_out_headers(script: &str) -> String {
    HEADER_LINE.replace_all(script, "\n$1").into_owned()
}

/// Paragraph break after every sentence-ending punctuation mark.
fn break_after_sentences(script: &str) -> String {
    script
        .replace('.', ".\n\n")
        .replace('!', "!\n\n")
        .replace('?', "?\n\n")
}

/// `(COMEDY)` suffix on every scene-location header.
fn tag_headers_comedy(script: &str) -> String {
    HEADER_LINE.replace_all(script, "$1 (COMEDY)").into_owned()
}

/// Exactly one blank line after every scene-location header.
fn single_blank_after_headers(script: &str) -> String {
    HEADER_LINE_AND_GAP
        .replace_all(script, "$1\n\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_formats_to_empty_output() {
        assert_eq!(format_script("", Style::Professional), "");
        assert_eq!(format_script("  \n\n \t ", Style::Creative), "");
    }

    #[test]
    fn header_is_uppercased() {
        let out = format_script("int. house - day", Style::Professional);
        assert!(out.contains("INT. HOUSE - DAY"));
        assert!(!out.contains("int."));
    }

    #[test]
    fn header_wins_over_colon_classification() {
        // Contains both a location marker and a colon: stays a header.
        let out = format_script("EXT. ROOFTOP: NIGHT", Style::Default);
        assert!(out.contains("EXT. ROOFTOP: NIGHT"));
    }

    #[test]
    fn dialogue_uppercases_character_and_keeps_text() {
        let out = format_script("john: hi there", Style::Creative);
        assert!(out.contains("JOHN: hi there"));
    }

    #[test]
    fn dialogue_keeps_everything_after_the_first_colon() {
        let out = format_script("guard: halt: who goes there", Style::Creative);
        assert!(out.contains("GUARD: halt: who goes there"));
    }

    #[test]
    fn professional_indents_dialogue() {
        let out = format_script("JOHN: hi there", Style::Professional);
        assert!(out.contains("JOHN:    hi there"));
    }

    #[test]
    fn empty_character_still_indents() {
        let out = format_script(": whispered words", Style::Professional);
        assert!(out.contains(":    whispered words"));
    }

    #[test]
    fn professional_adds_blank_line_before_header() {
        let out = format_script("He runs.\nINT. HOUSE - DAY", Style::Professional);
        let header_at = out.find("INT. HOUSE - DAY").unwrap();
        assert!(out[..header_at].ends_with("\n\n\n"));
    }

    #[test]
    fn creative_breaks_after_sentence_punctuation() {
        let out = format_script("JOHN: hi. there", Style::Creative);
        assert!(out.contains("JOHN: hi.\n\n there"));
    }

    #[test]
    fn dramatic_breaks_then_indents() {
        let out = format_script("JOHN: well! fine", Style::Dramatic);
        assert!(out.contains("JOHN:    well!\n\n fine"));
    }

    #[test]
    fn comedy_tags_headers() {
        let out = format_script("INT HOUSE\nEXT. YARD - DAY", Style::Comedy);
        assert!(out.contains("EXT. (COMEDY)"));
        // Action lines stay untagged.
        assert!(!out.contains("INT HOUSE (COMEDY)"));
    }

    #[test]
    fn default_leaves_one_blank_line_after_header() {
        let out = format_script("INT. HOUSE - DAY\nJohn waves", Style::Default);
        assert!(out.contains("INT. HOUSE - DAY\n\nJohn waves"));
    }

    #[test]
    fn default_style_does_not_indent_headers_with_colons() {
        let out = format_script("INT. HOUSE: DAY", Style::Default);
        assert!(!out.contains(":    "));
    }

    #[test]
    fn unknown_style_name_falls_back_to_default() {
        assert_eq!(Style::from_name("noir"), Style::Default);
        assert_eq!(Style::from_name("Professional"), Style::Professional);
    }
}
