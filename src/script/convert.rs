use super::formatter::{format_script, Style};

/// Formats raw text, then wraps every resulting paragraph into the
/// `Scene:`-block form the parser reads. This is the hand-off between the
/// formatting step and the parsing step; the paragraph text lands in the
/// scene's `Action:` line.
pub fn convert_to_script(text: &str, style: Style) -> String {
    let formatted = format_script(text, style);

    let mut script = String::new();
    let mut number = 1usize;
    for paragraph in formatted.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        script.push_str(&format!(
            "Scene: Scene {number}\nCharacter: \nDialogue: \nAction: {paragraph}\n\n"
        ));
        number += 1;
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_each_paragraph_into_a_scene_block() {
        let script = convert_to_script("The door creaks open\nA shadow moves", Style::Default);
        assert!(script.contains("Scene: Scene 1\nCharacter: \nDialogue: \nAction: The door creaks open"));
        assert!(script.contains("Scene: Scene 2\nCharacter: \nDialogue: \nAction: A shadow moves"));
    }

    #[test]
    fn empty_input_converts_to_empty_script() {
        assert_eq!(convert_to_script("", Style::Professional), "");
    }

    #[test]
    fn creative_breaks_make_extra_scene_blocks() {
        let script = convert_to_script("She runs. She hides", Style::Creative);
        assert!(script.contains("Scene: Scene 1"));
        assert!(script.contains("Scene: Scene 2"));
        assert!(script.contains("Action: She runs."));
        assert!(script.contains("Action: She hides"));
    }
}
