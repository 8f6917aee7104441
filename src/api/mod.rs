mod generation;

pub use generation::{build_prompt, AnimationOptions, GenerationClient, MotionType, DEFAULT_API_URL};
