//! Demo gallery filter state.
//!
//! Owns the active category selection and the fixed item list, and answers
//! the two pure queries the view needs: which chips to draw (and which one
//! is selected) and which items survive the current filter. Keeping this
//! out of the view means the filter logic is testable without a renderer.

use crate::content::model::{DemoItem, DemosDoc};

/// Sentinel category meaning "no filter". Always rendered as the first
/// chip and always the initial selection.
pub const ALL_CATEGORY: &str = "All";

/// One entry of the category chip strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub label: String,
    pub selected: bool,
}

/// State of the demo gallery widget.
///
/// `items` and `categories` are fixed for the page session; only the
/// active category changes, and only through [`GalleryState::select`].
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    active_category: String,
    categories: Vec<String>,
    items: Vec<DemoItem>,
}

impl GalleryState {
    pub fn new(doc: &DemosDoc) -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            categories: doc.categories.clone(),
            items: doc.items.clone(),
        }
    }

    /// Set the active category. The chip strip and item grid are both
    /// re-derived from state on the next view pass; nothing else needs
    /// to happen here.
    pub fn select(&mut self, name: impl Into<String>) {
        self.active_category = name.into();
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// The chip strip: the "All" sentinel followed by the declared
    /// categories. Selection is purely equality with the active category,
    /// so exactly one chip is selected whenever the active category is
    /// the sentinel or a declared category.
    pub fn chips(&self) -> Vec<Chip> {
        std::iter::once(ALL_CATEGORY)
            .chain(self.categories.iter().map(String::as_str))
            .map(|label| Chip {
                label: label.to_string(),
                selected: label == self.active_category,
            })
            .collect()
    }

    /// Items surviving the current filter, with their index into the full
    /// item list (the index keys thumbnail artwork and play messages).
    /// Exact match only; the sentinel passes everything through.
    pub fn visible_items(&self) -> Vec<(usize, &DemoItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                self.active_category == ALL_CATEGORY || item.category == self.active_category
            })
            .collect()
    }

    /// Look up an item by its index into the full list.
    pub fn item(&self, index: usize) -> Option<&DemoItem> {
        self.items.get(index)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::MediaKind;

    fn demo_doc() -> DemosDoc {
        DemosDoc {
            title: "Demos".to_string(),
            description: "Selected work".to_string(),
            categories: vec!["Video".to_string(), "Audio".to_string()],
            items: vec![
                DemoItem {
                    title: "Session reel".to_string(),
                    category: "Video".to_string(),
                    kind: MediaKind::Video,
                    ..DemoItem::default()
                },
                DemoItem {
                    title: "Single mix".to_string(),
                    category: "Audio".to_string(),
                    kind: MediaKind::Audio,
                    ..DemoItem::default()
                },
            ],
        }
    }

    #[test]
    fn test_default_selection_is_all() {
        let gallery = GalleryState::new(&demo_doc());
        assert_eq!(gallery.active_category(), ALL_CATEGORY);
        assert_eq!(gallery.visible_items().len(), 2);
    }

    #[test]
    fn test_exact_match_filter() {
        let mut gallery = GalleryState::new(&demo_doc());

        gallery.select("Video");
        let visible = gallery.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.title, "Session reel");

        gallery.select("Audio");
        let visible = gallery.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.title, "Single mix");
    }

    #[test]
    fn test_sentinel_resets_filter() {
        let mut gallery = GalleryState::new(&demo_doc());
        gallery.select("Audio");
        gallery.select(ALL_CATEGORY);
        assert_eq!(gallery.visible_items().len(), 2);
    }

    #[test]
    fn test_unknown_category_yields_empty_grid() {
        // No fallback: a name outside the declared list matches nothing.
        let mut gallery = GalleryState::new(&demo_doc());
        gallery.select("Sculpture");
        assert!(gallery.visible_items().is_empty());
    }

    #[test]
    fn test_exactly_one_chip_selected() {
        let mut gallery = GalleryState::new(&demo_doc());

        for choice in [ALL_CATEGORY, "Video", "Audio", "Video"] {
            gallery.select(choice);
            let chips = gallery.chips();
            assert_eq!(chips.len(), 3);
            let selected: Vec<_> = chips.iter().filter(|c| c.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].label, gallery.active_category());
        }
    }

    #[test]
    fn test_chip_order_starts_with_sentinel() {
        let gallery = GalleryState::new(&demo_doc());
        let chips = gallery.chips();
        assert_eq!(chips[0].label, ALL_CATEGORY);
        assert_eq!(chips[1].label, "Video");
        assert_eq!(chips[2].label, "Audio");
    }

    #[test]
    fn test_visible_items_keep_full_list_indices() {
        let mut gallery = GalleryState::new(&demo_doc());
        gallery.select("Audio");
        let visible = gallery.visible_items();
        assert_eq!(visible[0].0, 1);
    }
}
