//! Import list panel.
//!
//! The panel mirrors the last import list it was given: one row per
//! import, stacked vertically, followed by a stretch that packs the rows
//! to the top. Every update re-renders the rows from the new list.

use std::fmt::Write as _;

use crate::core::import::Import;

/// Imports that every QML document needs; their rows cannot be removed.
const CORE_IMPORTS: &[&str] = &["Qt", "QtQuick"];

/// A single row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLabel {
    import: Import,
    text: String,
    removable: bool,
}

impl ImportLabel {
    /// Create a row initialised from an import.
    pub fn new(import: &Import) -> Self {
        let removable = !import
            .url()
            .is_some_and(|url| CORE_IMPORTS.contains(&url));

        ImportLabel {
            import: import.clone(),
            text: import.to_import_string(true, false),
            removable,
        }
    }

    pub fn import(&self) -> &Import {
        &self.import
    }

    /// Text shown on the row.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the row offers a remove action.
    pub fn is_removable(&self) -> bool {
        self.removable
    }
}

/// An entry of a vertical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutItem {
    /// The row at this index of the panel
    Row(usize),
    /// Flexible space absorbing the remaining height
    Stretch,
}

/// A vertical stack of layout items, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerticalLayout {
    items: Vec<LayoutItem>,
}

impl VerticalLayout {
    pub fn new() -> Self {
        VerticalLayout::default()
    }

    pub fn add_row(&mut self, index: usize) {
        self.items.push(LayoutItem::Row(index));
    }

    pub fn add_stretch(&mut self) {
        self.items.push(LayoutItem::Stretch);
    }

    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Number of rows, not counting stretches.
    pub fn row_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, LayoutItem::Row(_)))
            .count()
    }
}

/// Vertical panel listing the imports of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportsPanel {
    labels: Vec<ImportLabel>,
    layout: VerticalLayout,
}

impl Default for ImportsPanel {
    fn default() -> Self {
        ImportsPanel::new()
    }
}

impl ImportsPanel {
    /// Create an empty panel.
    pub fn new() -> Self {
        let mut panel = ImportsPanel {
            labels: Vec::new(),
            layout: VerticalLayout::new(),
        };
        panel.update_layout();
        panel
    }

    /// Replace the displayed imports.
    ///
    /// All existing rows are dropped and one row is created per import, in
    /// input order.
    pub fn set_imports(&mut self, imports: &[Import]) {
        self.labels = imports.iter().map(ImportLabel::new).collect();
        tracing::debug!("showing {} imports", self.labels.len());
        self.update_layout();
    }

    /// Drop every row.
    pub fn remove_all_imports(&mut self) {
        self.labels.clear();
        self.update_layout();
    }

    /// Remove the row at `index` and return its import.
    ///
    /// Returns `None` if the index is out of range or the row is one of the
    /// core imports, which cannot be removed.
    pub fn remove_import(&mut self, index: usize) -> Option<Import> {
        if !self.labels.get(index)?.is_removable() {
            return None;
        }

        let removed = self.labels.remove(index).import;
        let remaining: Vec<Import> = self.labels.iter().map(|l| l.import.clone()).collect();
        self.set_imports(&remaining);
        Some(removed)
    }

    pub fn labels(&self) -> &[ImportLabel] {
        &self.labels
    }

    pub fn layout(&self) -> &VerticalLayout {
        &self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The imports currently shown, in display order.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.labels.iter().map(ImportLabel::import)
    }

    /// Render the panel as text, one line per layout row.
    ///
    /// Removable rows carry a `[x]` marker; the trailing stretch renders as
    /// nothing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in self.layout.items() {
            if let LayoutItem::Row(index) = *item {
                let label = &self.labels[index];
                let marker = if label.is_removable() { "[x]" } else { "   " };
                let _ = writeln!(out, "{} {}", marker, label.text());
            }
        }
        out
    }

    fn update_layout(&mut self) {
        let mut layout = VerticalLayout::new();
        for index in 0..self.labels.len() {
            layout.add_row(index);
        }
        layout.add_stretch();
        self.layout = layout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Import> {
        vec![
            Import::library("QtQuick", Some("2.2")),
            Import::library("QtQuick.Controls", Some("1.1")).with_alias("C"),
            Import::file("components"),
        ]
    }

    #[test]
    fn test_new_panel_is_empty() {
        let panel = ImportsPanel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.layout().items(), &[LayoutItem::Stretch]);
    }

    #[test]
    fn test_set_imports_creates_rows_in_order() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());

        let texts: Vec<&str> = panel.labels().iter().map(ImportLabel::text).collect();
        assert_eq!(
            texts,
            vec![
                "import QtQuick 2.2;",
                "import QtQuick.Controls 1.1 as C;",
                "import \"components\";",
            ]
        );
        assert_eq!(
            panel.layout().items(),
            &[
                LayoutItem::Row(0),
                LayoutItem::Row(1),
                LayoutItem::Row(2),
                LayoutItem::Stretch
            ]
        );
    }

    #[test]
    fn test_set_imports_replaces_previous_rows() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());
        panel.set_imports(&[Import::library("QtMultimedia", Some("5.0"))]);

        assert_eq!(panel.labels().len(), 1);
        assert_eq!(panel.layout().row_count(), 1);
        assert_eq!(panel.labels()[0].text(), "import QtMultimedia 5.0;");
    }

    #[test]
    fn test_set_empty_after_populated() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());
        panel.set_imports(&[]);

        assert!(panel.is_empty());
        assert_eq!(panel.layout().items(), &[LayoutItem::Stretch]);
    }

    #[test]
    fn test_imports_follow_display_order() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());
        panel.remove_import(1);

        let shown: Vec<&Import> = panel.imports().collect();
        assert_eq!(
            shown,
            vec![
                &Import::library("QtQuick", Some("2.2")),
                &Import::file("components"),
            ]
        );
    }

    #[test]
    fn test_remove_all_on_empty_panel() {
        let mut panel = ImportsPanel::new();
        panel.remove_all_imports();
        panel.remove_all_imports();

        assert!(panel.is_empty());
        assert_eq!(panel.layout(), ImportsPanel::new().layout());
    }

    #[test]
    fn test_remove_all_imports() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());
        panel.remove_all_imports();

        assert!(panel.is_empty());
        assert_eq!(panel.layout().row_count(), 0);
    }

    #[test]
    fn test_core_imports_are_not_removable() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());

        assert!(!panel.labels()[0].is_removable());
        assert!(panel.labels()[1].is_removable());
        assert!(panel.labels()[2].is_removable());

        assert_eq!(panel.remove_import(0), None);
        assert_eq!(panel.labels().len(), 3);
    }

    #[test]
    fn test_remove_import() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());

        let removed = panel.remove_import(1).unwrap();
        assert_eq!(removed.url(), Some("QtQuick.Controls"));
        assert_eq!(panel.labels().len(), 2);
        assert_eq!(
            panel.layout().items(),
            &[LayoutItem::Row(0), LayoutItem::Row(1), LayoutItem::Stretch]
        );
        assert_eq!(panel.remove_import(5), None);
    }

    #[test]
    fn test_render() {
        let mut panel = ImportsPanel::new();
        panel.set_imports(&sample());

        assert_eq!(
            panel.render(),
            "    import QtQuick 2.2;\n\
             [x] import QtQuick.Controls 1.1 as C;\n\
             [x] import \"components\";\n"
        );
        assert_eq!(ImportsPanel::new().render(), "");
    }
}
