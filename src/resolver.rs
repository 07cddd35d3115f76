//! Skill directory resolution.
//!
//! Computes, once at startup, the ordered list of directories skills are
//! aggregated from. Later sources override earlier ones when they define the
//! same skill name; the ordering here is the only place that priority is
//! encoded.

use std::path::{Path, PathBuf};

/// Environment override for the highest-priority skill directory.
pub const SKILLS_DIR_ENV: &str = "SKILLHUB_SKILLS_DIR";

/// A configured skill directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSource {
    /// Skills shipped next to the executable (lowest priority).
    Bundled(PathBuf),
    /// Per-user skills (`~/.skillhub/skills`).
    User(PathBuf),
    /// Hidden per-project skills (`<cwd>/.skillhub/skills`).
    ProjectHidden(PathBuf),
    /// Visible per-project skills (`<cwd>/skills`).
    Project(PathBuf),
    /// `SKILLHUB_SKILLS_DIR` override (highest priority).
    Override(PathBuf),
}

impl SkillSource {
    /// The directory this source points at.
    pub fn path(&self) -> &Path {
        match self {
            SkillSource::Bundled(p)
            | SkillSource::User(p)
            | SkillSource::ProjectHidden(p)
            | SkillSource::Project(p)
            | SkillSource::Override(p) => p,
        }
    }

    /// Short label used in logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SkillSource::Bundled(_) => "bundled",
            SkillSource::User(_) => "user",
            SkillSource::ProjectHidden(_) => "project-hidden",
            SkillSource::Project(_) => "project",
            SkillSource::Override(_) => "override",
        }
    }
}

/// Resolve the directory order for this process.
///
/// Runs once at startup: directory membership is fixed for the process
/// lifetime even though directory contents are re-read on every request.
pub fn resolve_sources() -> Vec<SkillSource> {
    let override_dir = std::env::var_os(SKILLS_DIR_ENV).map(PathBuf::from);

    resolve_from(
        bundled_dir(),
        dirs::home_dir(),
        std::env::current_dir().ok(),
        override_dir,
    )
}

/// Skills directory shipped alongside the executable.
fn bundled_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("skills")))
        .unwrap_or_else(|| PathBuf::from("skills"))
}

/// Core of [`resolve_sources`], with every input explicit.
///
/// Candidates are assembled lowest to highest priority and kept only if they
/// exist right now. If nothing exists, the bundled directory is returned
/// anyway so downstream components never see an empty list.
pub fn resolve_from(
    bundled: PathBuf,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
    override_dir: Option<PathBuf>,
) -> Vec<SkillSource> {
    let mut candidates = vec![SkillSource::Bundled(bundled.clone())];

    if let Some(home) = home {
        candidates.push(SkillSource::User(home.join(".skillhub").join("skills")));
    }

    if let Some(cwd) = cwd {
        candidates.push(SkillSource::ProjectHidden(
            cwd.join(".skillhub").join("skills"),
        ));
        candidates.push(SkillSource::Project(cwd.join("skills")));
    }

    if let Some(dir) = override_dir {
        candidates.push(SkillSource::Override(dir));
    }

    let sources: Vec<SkillSource> = candidates
        .into_iter()
        .filter(|s| s.path().exists())
        .collect();

    if sources.is_empty() {
        return vec![SkillSource::Bundled(bundled)];
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_nonexistent_candidates_are_dropped() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().join("project");
        fs::create_dir_all(cwd.join("skills")).unwrap();

        let sources = resolve_from(
            temp.path().join("missing-bundled"),
            Some(temp.path().join("missing-home")),
            Some(cwd.clone()),
            None,
        );

        assert_eq!(sources, vec![SkillSource::Project(cwd.join("skills"))]);
    }

    #[test]
    fn test_order_is_low_to_high_priority() {
        let temp = TempDir::new().unwrap();
        let bundled = temp.path().join("bundled");
        let home = temp.path().join("home");
        let cwd = temp.path().join("project");
        let override_dir = temp.path().join("override");

        fs::create_dir_all(&bundled).unwrap();
        fs::create_dir_all(home.join(".skillhub").join("skills")).unwrap();
        fs::create_dir_all(cwd.join(".skillhub").join("skills")).unwrap();
        fs::create_dir_all(cwd.join("skills")).unwrap();
        fs::create_dir_all(&override_dir).unwrap();

        let sources = resolve_from(
            bundled.clone(),
            Some(home.clone()),
            Some(cwd.clone()),
            Some(override_dir.clone()),
        );

        assert_eq!(
            sources,
            vec![
                SkillSource::Bundled(bundled),
                SkillSource::User(home.join(".skillhub").join("skills")),
                SkillSource::ProjectHidden(cwd.join(".skillhub").join("skills")),
                SkillSource::Project(cwd.join("skills")),
                SkillSource::Override(override_dir),
            ]
        );
    }

    #[test]
    fn test_empty_result_falls_back_to_bundled() {
        let temp = TempDir::new().unwrap();
        let bundled = temp.path().join("nothing-here");

        let sources = resolve_from(bundled.clone(), None, None, None);

        assert_eq!(sources, vec![SkillSource::Bundled(bundled)]);
    }

    #[test]
    fn test_override_is_last_even_when_others_exist() {
        let temp = TempDir::new().unwrap();
        let bundled = temp.path().join("bundled");
        let override_dir = temp.path().join("override");
        fs::create_dir_all(&bundled).unwrap();
        fs::create_dir_all(&override_dir).unwrap();

        let sources = resolve_from(bundled, None, None, Some(override_dir.clone()));

        assert_eq!(sources.last(), Some(&SkillSource::Override(override_dir)));
    }

    #[test]
    fn test_missing_override_is_subject_to_existence_gate() {
        let temp = TempDir::new().unwrap();
        let bundled = temp.path().join("bundled");
        fs::create_dir_all(&bundled).unwrap();

        let sources = resolve_from(
            bundled.clone(),
            None,
            None,
            Some(temp.path().join("missing-override")),
        );

        assert_eq!(sources, vec![SkillSource::Bundled(bundled)]);
    }
}
