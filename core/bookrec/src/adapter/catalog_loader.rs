//! カタログ読み込みの標準実装

use common::adapter::FileSystem;
use common::domain::HomeDir;
use common::error::Error;
use std::path::Path;
use std::sync::Arc;

use crate::domain::MoodCatalog;
use crate::ports::outbound::CatalogLoader;

/// 組み込みカタログ
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

pub struct StdCatalogLoader {
    fs: Arc<dyn FileSystem>,
    home: Option<HomeDir>,
}

impl StdCatalogLoader {
    pub fn new(fs: Arc<dyn FileSystem>, home: Option<HomeDir>) -> Self {
        Self { fs, home }
    }
}

impl CatalogLoader for StdCatalogLoader {
    fn load(&self, explicit: Option<&Path>) -> Result<MoodCatalog, Error> {
        if let Some(path) = explicit {
            return MoodCatalog::parse(&self.fs.read_to_string(path)?);
        }
        if let Some(home) = &self.home {
            let path = home.catalog_path();
            if self.fs.is_file(&path) {
                return MoodCatalog::parse(&self.fs.read_to_string(&path)?);
            }
        }
        MoodCatalog::parse(BUILTIN_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    fn loader(home: Option<HomeDir>) -> StdCatalogLoader {
        StdCatalogLoader::new(Arc::new(StdFileSystem), home)
    }

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = loader(None).load(None).unwrap();
        assert!(!catalog.genres().is_empty());
        for genre in catalog.genres() {
            assert!(
                !catalog.moods_for(genre).is_empty(),
                "genre {} has no moods",
                genre
            );
        }
        assert!(catalog
            .moods_for("Fantasy")
            .contains(&"Adventurous".to_string()));
    }

    #[test]
    fn test_home_override_is_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let home = HomeDir::new(dir.path());
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(
            home.catalog_path(),
            r#"{"genres":["Cookbooks"],"moods":{"Cookbooks":["Hungry"]}}"#,
        )
        .unwrap();
        let catalog = loader(Some(home)).load(None).unwrap();
        assert_eq!(catalog.genres().to_vec(), vec!["Cookbooks".to_string()]);
        assert_eq!(catalog.moods_for("Cookbooks"), vec!["Hungry"]);
    }

    #[test]
    fn test_missing_home_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = loader(Some(HomeDir::new(dir.path()))).load(None).unwrap();
        assert!(catalog.genres().contains(&"Fantasy".to_string()));
    }

    #[test]
    fn test_explicit_path_wins_and_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        let err = loader(None).load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let missing = dir.path().join("missing.json");
        let err = loader(None).load(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
