//! Lookup of champion icons in the local icon directory.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Icons whose file name cannot be guessed from the display name
const ICON_OVERRIDES: &[(&str, &str)] = &[
    ("Bel'Veth", "Belveth.png"),
    ("Cho'Gath", "Chogath.png"),
    ("Dr. Mundo", "DrMundo.png"),
    ("Jarvan IV", "JarvanIV.png"),
    ("Kai'Sa", "Kaisa.png"),
    ("Kha'Zix", "Khazix.png"),
    ("Kog'Maw", "KogMaw.png"),
    ("LeBlanc", "Leblanc.png"),
    ("Lee Sin", "LeeSin.png"),
    ("Master Yi", "MasterYi.png"),
    ("Miss Fortune", "MissFortune.png"),
    ("Nunu & Willump", "Nunu.png"),
    ("Rek'Sai", "RekSai.png"),
    ("Renata Glasc", "Renata.png"),
    ("Tahm Kench", "TahmKench.png"),
    ("Twisted Fate", "TwistedFate.png"),
    ("Vel'Koz", "Velkoz.png"),
    ("Xin Zhao", "XinZhao.png"),
    ("Wukong", "MonkeyKing.png"),
    ("Aurelion Sol", "AurelionSol.png"),
];

static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new("[^A-Za-z]+").unwrap());

/// Resolves champion names to icon files inside a directory
#[derive(Debug, Clone)]
pub struct IconResolver {
    dir: PathBuf,
}

impl IconResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File names tried for `name`, in order and without duplicates.
    pub fn candidates(name: &str) -> Vec<String> {
        let mut candidates = Vec::with_capacity(2);
        if let Some((_, file_name)) = ICON_OVERRIDES.iter().find(|(champion, _)| *champion == name) {
            candidates.push((*file_name).to_owned());
        }
        let guessed = default_file_name(name);
        if !candidates.contains(&guessed) {
            candidates.push(guessed);
        }
        candidates
    }

    /// Path of the first candidate present on disk.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        Self::candidates(name)
            .into_iter()
            .map(|file_name| self.dir.join(file_name))
            .find(|path| path.is_file())
    }
}

/// `Dr. Mundo` → `DrMundo.png`
fn default_file_name(name: &str) -> String {
    let joined: String = NON_LETTERS.split(name).collect();
    format!("{joined}.png")
}

#[cfg(test)]
mod tests {
    use std::fs::{File, create_dir};

    use tempfile::TempDir;

    use super::*;

    fn icon_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            File::create(dir.path().join(file)).unwrap();
        }
        dir
    }

    #[test]
    fn guessed_names_strip_non_letters() {
        assert_eq!(default_file_name("Dr. Mundo"), "DrMundo.png");
        assert_eq!(default_file_name("Kog'Maw"), "KogMaw.png");
        assert_eq!(default_file_name("Nunu & Willump"), "NunuWillump.png");
        assert_eq!(default_file_name("Teemo"), "Teemo.png");
    }

    #[test]
    fn overrides_come_first() {
        assert_eq!(IconResolver::candidates("Wukong"), vec!["MonkeyKing.png", "Wukong.png"]);
        assert_eq!(IconResolver::candidates("Lee Sin"), vec!["LeeSin.png"]);
        assert_eq!(IconResolver::candidates("Ahri"), vec!["Ahri.png"]);
    }

    #[test]
    fn resolves_existing_files_only() {
        let dir = icon_dir(&["MonkeyKing.png", "Teemo.png", "Nunu.png"]);
        let icons = IconResolver::new(dir.path());

        assert_eq!(icons.resolve("Wukong"), Some(dir.path().join("MonkeyKing.png")));
        assert_eq!(icons.resolve("Teemo"), Some(dir.path().join("Teemo.png")));
        assert_eq!(icons.resolve("Nunu & Willump"), Some(dir.path().join("Nunu.png")));
        assert_eq!(icons.resolve("Ahri"), None);
    }

    #[test]
    fn falls_back_to_guessed_name_when_override_is_missing() {
        let dir = icon_dir(&["Wukong.png"]);
        let icons = IconResolver::new(dir.path());
        assert_eq!(icons.resolve("Wukong"), Some(dir.path().join("Wukong.png")));
    }

    #[test]
    fn directories_are_not_icons() {
        let dir = icon_dir(&[]);
        create_dir(dir.path().join("Teemo.png")).unwrap();
        let icons = IconResolver::new(dir.path());
        assert_eq!(icons.resolve("Teemo"), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let dir = icon_dir(&["Chogath.png", "Teemo.png"]);
        let icons = IconResolver::new(dir.path());
        let first = icons.resolve("Cho'Gath");
        for _ in 0..10 {
            assert_eq!(icons.resolve("Cho'Gath"), first);
        }
        assert_eq!(first, Some(dir.path().join("Chogath.png")));
    }

    #[test]
    fn missing_directory_resolves_nothing() {
        let icons = IconResolver::new("/this/directory/does/not/exist");
        assert_eq!(icons.resolve("Teemo"), None);
    }
}
