// SPDX-License-Identifier: MPL-2.0
//! Project gallery: catalog loading and category filtering.
//!
//! Projects live in a content directory next to a `projects.toml` catalog
//! describing title, blurb, category and image file per project. The
//! catalog order is the display order. Filtering only changes which cards
//! are shown in the grid; the lightbox always navigates the full catalog so
//! its index arithmetic is independent of the active filter.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog file name inside the content directory.
const CATALOG_FILE: &str = "projects.toml";

/// Raster formats the gallery accepts.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Project categories used by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LivingSpaces,
    Kitchens,
    Bedrooms,
    Offices,
    Commercial,
}

impl Category {
    /// All categories, in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::LivingSpaces,
        Category::Kitchens,
        Category::Bedrooms,
        Category::Offices,
        Category::Commercial,
    ];

    /// Stable identifier used in the catalog file and persisted state.
    pub fn slug(self) -> &'static str {
        match self {
            Category::LivingSpaces => "living-spaces",
            Category::Kitchens => "kitchens",
            Category::Bedrooms => "bedrooms",
            Category::Offices => "offices",
            Category::Commercial => "commercial",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// i18n key for the filter label.
    pub fn label_key(self) -> &'static str {
        match self {
            Category::LivingSpaces => "gallery-filter-living-spaces",
            Category::Kitchens => "gallery-filter-kitchens",
            Category::Bedrooms => "gallery-filter-bedrooms",
            Category::Offices => "gallery-filter-offices",
            Category::Commercial => "gallery-filter-commercial",
        }
    }
}

/// Active gallery filter. `All` matches every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Stable identifier for persistence.
    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        match Category::from_slug(slug) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    pub category: Category,
    /// Image path, relative to the content directory in the catalog file,
    /// resolved to an absolute path on load.
    pub image: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    project: Vec<Project>,
}

/// The ordered project list plus the active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCollection {
    projects: Vec<Project>,
    filter: CategoryFilter,
}

impl ProjectCollection {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: CategoryFilter::All,
        }
    }

    /// Loads the catalog from a content directory and resolves image paths.
    ///
    /// Projects whose image file is missing or not a supported raster
    /// format are dropped; the catalog order of the survivors is kept.
    pub fn load(content_dir: &Path) -> Result<Self> {
        let catalog_path = content_dir.join(CATALOG_FILE);
        let raw = std::fs::read_to_string(&catalog_path).map_err(|e| {
            Error::Io(format!("{}: {}", catalog_path.display(), e))
        })?;
        let catalog: Catalog = toml::from_str(&raw)?;

        let mut projects = Vec::with_capacity(catalog.project.len());
        for mut project in catalog.project {
            let resolved = content_dir.join(&project.image);
            if !is_supported_image(&resolved) || !resolved.is_file() {
                continue;
            }
            project.image = resolved;
            projects.push(project);
        }

        Ok(Self::new(projects))
    }

    /// Built-in demo catalog shown when no content directory is given.
    /// Images resolve lazily; missing files render as placeholders.
    pub fn sample() -> Self {
        let entries: &[(&str, &str, &str, Category)] = &[
            ("riverside-loft", "Riverside Loft", "Open living room with walnut accents", Category::LivingSpaces),
            ("atelier-kitchen", "Atelier Kitchen", "Matte black fixtures over oak", Category::Kitchens),
            ("quiet-bedroom", "Quiet Bedroom", "Layered linen and soft light", Category::Bedrooms),
            ("glasshouse-office", "Glasshouse Office", "A workspace under the sky", Category::Offices),
            ("corner-bistro", "Corner Bistro", "Forty covers, one long banquette", Category::Commercial),
            ("garden-living", "Garden Living", "Indoor planting as a room divider", Category::LivingSpaces),
            ("marble-galley", "Marble Galley", "A compact galley in honed stone", Category::Kitchens),
            ("attic-suite", "Attic Suite", "Sloped ceilings, hidden storage", Category::Bedrooms),
            ("harbor-lobby", "Harbor Lobby", "Reception for a shipping house", Category::Commercial),
        ];

        let projects = entries
            .iter()
            .map(|(slug, title, blurb, category)| Project {
                slug: (*slug).to_string(),
                title: (*title).to_string(),
                blurb: (*blurb).to_string(),
                category: *category,
                image: PathBuf::from(format!("projects/{slug}.jpg")),
            })
            .collect();

        Self::new(projects)
    }

    /// The full, unfiltered catalog in display order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Indices of the projects visible under the active filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p.category))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Whether the project at `index` is shown by the active filter.
    pub fn is_visible(&self, index: usize) -> bool {
        self.projects
            .get(index)
            .is_some_and(|p| self.filter.matches(p.category))
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_catalog(dir: &Path, body: &str) {
        fs::write(dir.join(CATALOG_FILE), body).expect("failed to write catalog");
    }

    fn touch_image(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"fake image data").expect("failed to write image");
    }

    #[test]
    fn all_filter_matches_everything() {
        let filter = CategoryFilter::All;
        for category in Category::ALL {
            assert!(filter.matches(category));
        }
        assert!(!filter.is_active());
    }

    #[test]
    fn category_filter_matches_only_its_category() {
        let filter = CategoryFilter::Only(Category::Kitchens);
        assert!(filter.matches(Category::Kitchens));
        assert!(!filter.matches(Category::Bedrooms));
        assert!(filter.is_active());
    }

    #[test]
    fn filter_slug_round_trips() {
        assert_eq!(CategoryFilter::from_slug("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_slug("kitchens"),
            CategoryFilter::Only(Category::Kitchens)
        );
        // Unknown slugs degrade to All rather than erroring.
        assert_eq!(CategoryFilter::from_slug("spaceships"), CategoryFilter::All);
    }

    #[test]
    fn visible_indices_follow_the_filter() {
        let mut collection = ProjectCollection::sample();
        assert_eq!(collection.visible_indices().len(), collection.len());

        collection.set_filter(CategoryFilter::Only(Category::Kitchens));
        let visible = collection.visible_indices();
        assert!(!visible.is_empty());
        for idx in &visible {
            assert_eq!(collection.get(*idx).expect("index").category, Category::Kitchens);
        }
    }

    #[test]
    fn filtering_does_not_reorder_the_catalog() {
        let mut collection = ProjectCollection::sample();
        let before: Vec<String> = collection.all().iter().map(|p| p.slug.clone()).collect();
        collection.set_filter(CategoryFilter::Only(Category::Commercial));
        let after: Vec<String> = collection.all().iter().map(|p| p.slug.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn load_reads_catalog_and_resolves_images() {
        let dir = tempdir().expect("failed to create temp dir");
        touch_image(dir.path(), "loft.jpg");
        write_catalog(
            dir.path(),
            r#"
            [[project]]
            slug = "loft"
            title = "Loft"
            blurb = "A loft"
            category = "living-spaces"
            image = "loft.jpg"
            "#,
        );

        let collection = ProjectCollection::load(dir.path()).expect("load failed");
        assert_eq!(collection.len(), 1);
        let project = collection.get(0).expect("project");
        assert_eq!(project.title, "Loft");
        assert!(project.image.is_absolute() || project.image.starts_with(dir.path()));
    }

    #[test]
    fn load_drops_projects_with_missing_images() {
        let dir = tempdir().expect("failed to create temp dir");
        touch_image(dir.path(), "real.png");
        write_catalog(
            dir.path(),
            r#"
            [[project]]
            slug = "real"
            title = "Real"
            category = "offices"
            image = "real.png"

            [[project]]
            slug = "ghost"
            title = "Ghost"
            category = "offices"
            image = "ghost.png"
            "#,
        );

        let collection = ProjectCollection::load(dir.path()).expect("load failed");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).expect("project").slug, "real");
    }

    #[test]
    fn load_rejects_unsupported_formats() {
        let dir = tempdir().expect("failed to create temp dir");
        touch_image(dir.path(), "plan.pdf");
        write_catalog(
            dir.path(),
            r#"
            [[project]]
            slug = "plan"
            title = "Plan"
            category = "offices"
            image = "plan.pdf"
            "#,
        );

        let collection = ProjectCollection::load(dir.path()).expect("load failed");
        assert!(collection.is_empty());
    }

    #[test]
    fn load_fails_without_a_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(ProjectCollection::load(dir.path()).is_err());
    }

    #[test]
    fn load_fails_on_malformed_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        write_catalog(dir.path(), "not even toml [[[");
        assert!(matches!(
            ProjectCollection::load(dir.path()),
            Err(crate::error::Error::Config(_))
        ));
    }
}
