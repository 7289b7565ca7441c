//! RON catalog loader
//!
//! Loads catalog tables from external RON files, with fallback to the
//! built-in lists for any file that is absent.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::skills::{default_skill_templates, SkillTemplate};
use super::tags::{CatalogEntry, TechRange};
use super::traits::{default_advantages, default_disadvantages, Advantage, Disadvantage};

const ADVANTAGES_FILE: &str = "advantages.ron";
const DISADVANTAGES_FILE: &str = "disadvantages.ron";
const SKILLS_FILE: &str = "skills.ron";

/// Errors raised while reading or writing catalog files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: ron::Error,
    },
    #[error("{name}: technology range {min}..={max} is inverted")]
    InvalidRange { name: String, min: i32, max: i32 },
    #[error("{0}: base weight must be at least 1")]
    ZeroWeight(String),
}

/// Immutable reference tables the generator draws from
#[derive(Debug, Clone)]
pub struct Catalog {
    pub advantages: Vec<Advantage>,
    pub disadvantages: Vec<Disadvantage>,
    pub skills: Vec<SkillTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            advantages: default_advantages(),
            disadvantages: default_disadvantages(),
            skills: default_skill_templates(),
        }
    }
}

impl Catalog {
    /// Built-in tables only
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load overrides from `dir` if given, falling back to the built-in
    /// tables when loading fails
    pub fn new(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::builtin();
        };

        Self::load_from_dir(dir).unwrap_or_else(|e| {
            log::warn!("Failed to load catalog from {:?}: {}. Using built-in tables.", dir, e);
            Self::builtin()
        })
    }

    /// Load catalog tables from `dir`; missing files keep the built-in list
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let catalog = Self {
            advantages: load_list(dir, ADVANTAGES_FILE, default_advantages)?,
            disadvantages: load_list(dir, DISADVANTAGES_FILE, default_disadvantages)?,
            skills: load_list(dir, SKILLS_FILE, default_skill_templates)?,
        };
        catalog.validate()?;

        log::info!(
            "Catalog loaded from {:?}: {} advantages, {} disadvantages, {} skills",
            dir,
            catalog.advantages.len(),
            catalog.disadvantages.len(),
            catalog.skills.len()
        );
        Ok(catalog)
    }

    /// Check range and weight invariants of every entry
    pub fn validate(&self) -> Result<(), CatalogError> {
        for adv in &self.advantages {
            check_range(adv)?;
        }
        for dis in &self.disadvantages {
            check_range(dis)?;
        }
        for skill in &self.skills {
            check_range(skill)?;
            if skill.base_weight == 0 {
                return Err(CatalogError::ZeroWeight(skill.name.clone()));
            }
        }
        Ok(())
    }

    /// Find a skill template by name
    pub fn find_skill(&self, name: &str) -> Option<&SkillTemplate> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Write all three tables to `dir` for easy editing
    pub fn export_to_dir(&self, dir: &Path) -> Result<(), CatalogError> {
        fs::create_dir_all(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        write_list(dir, ADVANTAGES_FILE, &self.advantages)?;
        write_list(dir, DISADVANTAGES_FILE, &self.disadvantages)?;
        write_list(dir, SKILLS_FILE, &self.skills)?;

        log::info!("Catalog exported to {:?}", dir);
        Ok(())
    }
}

/// Export the built-in catalog to `dir`
pub fn export_default_catalog(dir: &Path) -> Result<(), CatalogError> {
    Catalog::builtin().export_to_dir(dir)
}

fn check_range<T: CatalogEntry>(entry: &T) -> Result<(), CatalogError> {
    let TechRange { min, max } = entry.tech_range();
    if min > max {
        return Err(CatalogError::InvalidRange {
            name: entry.name().to_string(),
            min,
            max,
        });
    }
    Ok(())
}

fn load_list<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    fallback: fn() -> Vec<T>,
) -> Result<Vec<T>, CatalogError> {
    let path = dir.join(file);
    if !path.exists() {
        log::debug!("{:?} not found, using built-in table", path);
        return Ok(fallback());
    }

    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| CatalogError::Parse { path, source })
}

fn write_list<T: Serialize>(dir: &Path, file: &'static str, items: &[T]) -> Result<(), CatalogError> {
    let text = ron::ser::to_string_pretty(items, ron::ser::PrettyConfig::default())
        .map_err(|source| CatalogError::Serialize { file, source })?;
    let path = dir.join(file);
    fs::write(&path, text).map_err(|source| CatalogError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pointbuy-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_export_then_load() {
        let dir = scratch_dir("export");
        export_default_catalog(&dir).unwrap();

        assert!(dir.join(ADVANTAGES_FILE).exists());
        assert!(dir.join(DISADVANTAGES_FILE).exists());
        assert!(dir.join(SKILLS_FILE).exists());

        let loaded = Catalog::load_from_dir(&dir).unwrap();
        let builtin = Catalog::builtin();
        assert_eq!(loaded.advantages, builtin.advantages);
        assert_eq!(loaded.disadvantages, builtin.disadvantages);
        assert_eq!(loaded.skills, builtin.skills);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = scratch_dir("partial");
        fs::write(
            dir.join(ADVANTAGES_FILE),
            r#"[(name: "Ambidexterity", cost: 5, tags: [mundane])]"#,
        )
        .unwrap();

        let loaded = Catalog::load_from_dir(&dir).unwrap();
        assert_eq!(loaded.advantages.len(), 1);
        assert_eq!(loaded.advantages[0].tech_range, TechRange::ALL);
        assert_eq!(loaded.skills.len(), default_skill_templates().len());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_find_skill() {
        let catalog = Catalog::builtin();
        let chem = catalog.find_skill("Chemistry").unwrap();
        assert_eq!(chem.difficulty, Difficulty::Hard);
        assert_eq!(chem.tech_range, TechRange::new(5, 12));
        assert!(catalog.find_skill("Basket Weaving").is_none());
    }

    #[test]
    fn test_skill_override_replaces_table() {
        let dir = scratch_dir("skills");
        fs::write(
            dir.join(SKILLS_FILE),
            r#"[(name: "Hyperspace Navigation", base_attribute: IQ, difficulty: "VH",
                 tags: [super], tech_range: (min: 10, max: 12), categories: [vehicle])]"#,
        )
        .unwrap();

        let loaded = Catalog::load_from_dir(&dir).unwrap();
        assert_eq!(loaded.skills.len(), 1);
        let nav = loaded.find_skill("Hyperspace Navigation").unwrap();
        assert_eq!(nav.difficulty, Difficulty::VeryHard);
        assert_eq!(nav.base_weight, 1);
        assert!(loaded.find_skill("Chemistry").is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let dir = scratch_dir("inverted");
        fs::write(
            dir.join(DISADVANTAGES_FILE),
            r#"[(name: "Broken", cost: -5, tags: [mundane], tech_range: (min: 8, max: 2))]"#,
        )
        .unwrap();

        let err = Catalog::load_from_dir(&dir).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { min: 8, max: 2, .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.skills[0].base_weight = 0;
        assert!(matches!(catalog.validate(), Err(CatalogError::ZeroWeight(_))));
    }

    #[test]
    fn test_bad_file_falls_back_to_builtin() {
        let dir = scratch_dir("garbage");
        fs::write(dir.join(SKILLS_FILE), "not ron at all [").unwrap();

        assert!(matches!(Catalog::load_from_dir(&dir), Err(CatalogError::Parse { .. })));
        let catalog = Catalog::new(Some(&dir));
        assert_eq!(catalog.skills.len(), default_skill_templates().len());

        let _ = fs::remove_dir_all(&dir);
    }
}
