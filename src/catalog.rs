//! The scraped method catalog.
//!
//! A [`MethodCatalog`] maps each documented API category to the method
//! names listed under it. Categories keep the order in which they were
//! encountered in the documentation page.

use serde::Serialize;

/// One documented category and its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category name, case preserved as scraped.
    pub name: String,
    /// Method names in document order.
    pub methods: Vec<String>,
}

/// Category name to ordered method names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MethodCatalog {
    categories: Vec<Category>,
}

impl MethodCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category.
    ///
    /// If a category with the same name already exists its methods are
    /// replaced in place and the previous methods are returned.
    pub fn insert(&mut self, name: impl Into<String>, methods: Vec<String>) -> Option<Vec<String>> {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.methods, methods)),
            None => {
                self.categories.push(Category { name, methods });
                None
            }
        }
    }

    /// Methods for a category, if present.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.methods.as_slice())
    }

    /// Categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories sorted lexicographically by name.
    pub fn sorted(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of methods across all categories.
    pub fn method_count(&self) -> usize {
        self.categories.iter().map(|c| c.methods.len()).sum()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for MethodCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, methods) in iter {
            catalog.insert(name, methods);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn insert_keeps_document_order() {
        let mut catalog = MethodCatalog::new();
        catalog.insert("User", methods(&["user.getInfo"]));
        catalog.insert("Album", methods(&["album.getInfo"]));

        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Album"]);
    }

    #[test]
    fn duplicate_category_last_write_wins() {
        let mut catalog = MethodCatalog::new();
        catalog.insert("Album", methods(&["album.getInfo"]));
        catalog.insert("User", methods(&["user.getInfo"]));
        let previous = catalog.insert("Album", methods(&["album.search"]));

        assert_eq!(previous, Some(methods(&["album.getInfo"])));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Album"), Some(&methods(&["album.search"])[..]));
        assert_eq!(catalog.categories()[0].name, "Album");
    }

    #[test]
    fn sorted_is_lexicographic() {
        let catalog: MethodCatalog = vec![
            ("Track", methods(&[])),
            ("Album", methods(&[])),
            ("Library", methods(&[])),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = catalog.sorted().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Album", "Library", "Track"]);
    }

    #[test]
    fn method_count_flattens_categories() {
        let catalog: MethodCatalog = vec![
            ("Album", methods(&["album.getInfo", "album.search"])),
            ("Artist", methods(&["artist.getInfo"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.method_count(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn get_is_case_sensitive() {
        let catalog: MethodCatalog = vec![("Album", methods(&["album.getInfo"]))]
            .into_iter()
            .collect();
        assert!(catalog.get("album").is_none());
    }

    #[test]
    fn serializes_as_list_of_categories() {
        let catalog: MethodCatalog = vec![("Album", methods(&["album.getInfo"]))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"name":"Album","methods":["album.getInfo"]}]"#);
    }
}
