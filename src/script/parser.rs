use crate::scene::{Scene, SceneKind};

/// Converts script text into an ordered scene list.
///
/// Single forward pass over trimmed non-empty lines with one scene under
/// construction at a time: a `Scene:` line finalizes the previous scene and
/// starts the next, field lines fill the scene under construction, and
/// `Text on Screen:` / `Audio:` lines append standalone scenes immediately.
/// Lines matching no prefix are skipped, so this never fails. Every id is
/// drawn from a single counter, keeping ids unique across kinds.
pub fn parse(text: &str) -> Vec<Scene> {
    let mut scenes = Vec::new();
    let mut current: Option<Scene> = None;
    let mut counter = 1usize;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(rest) = line.strip_prefix("Scene:") {
            if let Some(done) = current.take() {
                scenes.push(done);
            }
            let mut scene = Scene::new(format!("scene-{counter}"), SceneKind::Scene);
            scene.title = rest.trim().to_string();
            counter += 1;
            current = Some(scene);
        } else if let Some(rest) = line.strip_prefix("Character:") {
            if let Some(scene) = current.as_mut() {
                scene.character = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Dialogue:") {
            if let Some(scene) = current.as_mut() {
                scene.dialogue = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Visual:") {
            if let Some(scene) = current.as_mut() {
                scene.visual = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Sound Effects:") {
            if let Some(scene) = current.as_mut() {
                scene.sound = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Music:") {
            if let Some(scene) = current.as_mut() {
                scene.music = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Action:") {
            if let Some(scene) = current.as_mut() {
                scene.action = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("Text on Screen:") {
            let mut scene = Scene::new(format!("text-{counter}"), SceneKind::Text);
            scene.action = rest.trim().to_string();
            counter += 1;
            scenes.push(scene);
        } else if let Some(rest) = line.strip_prefix("Audio:") {
            let mut scene = Scene::new(format!("audio-{counter}"), SceneKind::Audio);
            scene.action = rest.trim().to_string();
            counter += 1;
            scenes.push(scene);
        }
    }

    if let Some(done) = current.take() {
        scenes.push(done);
    }
    scenes
}

/// Writes scenes back into the textual form `parse` reads. Parsing the
/// rendered text reproduces the same scenes (ids are regenerated from the
/// counter, so they match whenever the input order matches).
pub fn render_script(scenes: &[Scene]) -> String {
    let mut out = String::new();
    for scene in scenes {
        match scene.kind {
            SceneKind::Scene => {
                out.push_str(&format!(
                    "Scene: {}\nCharacter: {}\nDialogue: {}\nVisual: {}\nSound Effects: {}\nMusic: {}\nAction: {}\n\n",
                    scene.title,
                    scene.character,
                    scene.dialogue,
                    scene.visual,
                    scene.sound,
                    scene.music,
                    scene.action,
                ));
            }
            SceneKind::Text => {
                out.push_str(&format!("Text on Screen: {}\n\n", scene.action));
            }
            SceneKind::Audio => {
                out.push_str(&format!("Audio: {}\n\n", scene.action));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_scene_block() {
        let scenes = parse("Scene: Intro\nCharacter: Hero\nDialogue: Hello\nAction: waves");
        assert_eq!(scenes.len(), 1);
        let scene = &scenes[0];
        assert_eq!(scene.id, "scene-1");
        assert_eq!(scene.title, "Intro");
        assert_eq!(scene.character, "Hero");
        assert_eq!(scene.dialogue, "Hello");
        assert_eq!(scene.action, "waves");
        assert_eq!(scene.kind, SceneKind::Scene);
        assert_eq!(scene.visual, "");
        assert_eq!(scene.sound, "");
        assert_eq!(scene.music, "");
    }

    #[test]
    fn text_on_screen_is_a_standalone_scene() {
        let scenes = parse("Text on Screen: THE END");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].id, "text-1");
        assert_eq!(scenes[0].action, "THE END");
        assert_eq!(scenes[0].kind, SceneKind::Text);
        assert_eq!(scenes[0].title, "");
    }

    #[test]
    fn consecutive_scene_headers_yield_empty_scenes() {
        let scenes = parse("Scene: One\nScene: Two");
        assert_eq!(scenes.len(), 2);
        for scene in &scenes {
            assert_eq!(scene.character, "");
            assert_eq!(scene.dialogue, "");
            assert_eq!(scene.action, "");
        }
        assert_eq!(scenes[0].title, "One");
        assert_eq!(scenes[1].title, "Two");
    }

    #[test]
    fn ids_stay_unique_across_kinds() {
        let scenes = parse(
            "Text on Screen: A\nText on Screen: B\nAudio: door slam\nScene: One\nAudio: rain",
        );
        let ids: Vec<_> = scenes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["text-1", "text-2", "audio-3", "audio-5", "scene-4"]);
    }

    #[test]
    fn field_lines_without_a_scene_are_dropped() {
        let scenes = parse("Character: Ghost\nDialogue: boo\nScene: One");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].character, "");
        assert_eq!(scenes[0].dialogue, "");
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let scenes = parse("random prose\nScene: One\nCamera: pans left\nAction: runs");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].action, "runs");
    }

    #[test]
    fn prefix_matching_is_case_sensitive() {
        assert!(parse("scene: lowercase").is_empty());
        assert!(parse("SCENE: shouting").is_empty());
    }

    #[test]
    fn scene_order_follows_finalization_order() {
        // A standalone line inside a scene block lands before the block's
        // scene, which is only finalized at the next header.
        let scenes = parse("Scene: A\nText on Screen: X\nScene: B");
        let kinds: Vec<_> = scenes.iter().map(|s| (s.kind, s.title.as_str())).collect();
        assert_eq!(
            kinds,
            [
                (SceneKind::Text, ""),
                (SceneKind::Scene, "A"),
                (SceneKind::Scene, "B"),
            ]
        );
    }

    #[test]
    fn empty_input_parses_to_no_scenes() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n").is_empty());
    }

    #[test]
    fn render_then_parse_reproduces_scene_content() {
        let first = parse(
            "Scene: Intro\nCharacter: Hero\nDialogue: Hello\nVisual: fog\nSound Effects: wind\nMusic: strings\nAction: waves\nAudio: thunder\nScene: Outro",
        );
        let second = parse(&render_script(&first));
        let strip = |scenes: &[Scene]| -> Vec<Scene> {
            scenes
                .iter()
                .cloned()
                .map(|mut s| {
                    s.id = String::new();
                    s
                })
                .collect()
        };
        assert_eq!(strip(&first), strip(&second));
    }
}
