use super::{Scene, SceneKind};
use uuid::Uuid;

/// Field-level edit applied by [`SceneStore::update`]. `None` leaves the
/// existing value alone.
#[derive(Debug, Clone, Default)]
pub struct ScenePatch {
    pub title: Option<String>,
    pub character: Option<String>,
    pub dialogue: Option<String>,
    pub action: Option<String>,
    pub visual: Option<String>,
    pub sound: Option<String>,
    pub music: Option<String>,
    pub kind: Option<SceneKind>,
}

/// Ordered scene collection. Insertion order is timeline order; ids are
/// unique at all times. Operations referencing a missing id are silent
/// no-ops so repeated UI actions stay idempotent.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    scenes: Vec<Scene>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Appends a new empty scene with a fresh unique id and a placeholder
    /// title. Never fails.
    pub fn add(&mut self) -> &Scene {
        let mut scene = Scene::new(format!("scene-{}", Uuid::new_v4()), SceneKind::Scene);
        scene.title = format!("Scene {}", self.scenes.len() + 1);
        let idx = self.scenes.len();
        self.scenes.push(scene);
        &self.scenes[idx]
    }

    /// Merges `patch` into the scene matching `id`.
    pub fn update(&mut self, id: &str, patch: ScenePatch) {
        let Some(scene) = self.scenes.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if let Some(title) = patch.title {
            scene.title = title;
        }
        if let Some(character) = patch.character {
            scene.character = character;
        }
        if let Some(dialogue) = patch.dialogue {
            scene.dialogue = dialogue;
        }
        if let Some(action) = patch.action {
            scene.action = action;
        }
        if let Some(visual) = patch.visual {
            scene.visual = visual;
        }
        if let Some(sound) = patch.sound {
            scene.sound = sound;
        }
        if let Some(music) = patch.music {
            scene.music = music;
        }
        if let Some(kind) = patch.kind {
            scene.kind = kind;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.scenes.retain(|s| s.id != id);
    }

    /// Replaces the whole ordered collection, e.g. after parsing a script.
    pub fn replace_all(&mut self, scenes: Vec<Scene>) {
        self.scenes = scenes;
    }

    /// Records a generated media reference on the scene matching `id`.
    pub fn attach_media(&mut self, id: &str, media: impl Into<String>) {
        if let Some(scene) = self.scenes.iter_mut().find(|s| s.id == id) {
            scene.image_data = Some(media.into());
        }
    }
}
