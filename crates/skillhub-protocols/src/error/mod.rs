//! Error types shared across skillhub.

mod skill;

pub use skill::SkillError;
