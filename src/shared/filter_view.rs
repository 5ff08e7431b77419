// src/shared/filter_view.rs
//
// In-memory category + free-text filtering over a fully loaded listing.

use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;

/// A record the listing pages can filter.
pub trait Searchable {
    type Category: Copy + Eq + Display;

    fn category(&self) -> Self::Category;
    fn title(&self) -> &str;
    /// Short text shown on the card (excerpt or description).
    fn summary(&self) -> &str;
    fn tags(&self) -> &[String];

    fn is_featured(&self) -> bool {
        false
    }

    /// `needle` must already be lowercased.
    fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.title().to_lowercase().contains(needle)
            || self.summary().to_lowercase().contains(needle)
            || self
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Copy + Eq + Display> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(c) => c.to_string(),
        }
    }
}

impl<C: FromStr> CategoryFilter<C> {
    /// Reads a `category` query value. Missing, blank and `All` select
    /// everything; anything else must be a known category label.
    pub fn parse(raw: Option<&str>) -> Result<Self, C::Err> {
        match raw.map(str::trim) {
            None | Some("") | Some("All") => Ok(CategoryFilter::All),
            Some(label) => label.parse().map(CategoryFilter::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TabCount {
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// Owns the loaded list and the local filter state for one page render.
#[derive(Debug, Clone)]
pub struct FilterView<T: Searchable> {
    items: Vec<T>,
    category: CategoryFilter<T::Category>,
    query: String,
}

impl<T: Searchable> FilterView<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            category: CategoryFilter::All,
            query: String::new(),
        }
    }

    pub fn category(&self) -> CategoryFilter<T::Category> {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter<T::Category>) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_filters(&mut self) {
        self.category = CategoryFilter::All;
        self.query.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All || !self.query.is_empty()
    }

    /// Items passing both the category filter and the search query, in
    /// their loaded order.
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.query.to_lowercase();

        self.items
            .iter()
            .filter(|item| self.category.matches(item.category()))
            .filter(|item| item.matches_query(&needle))
            .collect()
    }

    /// The active tab reports the filtered count, every other tab the size
    /// of its category.
    pub fn tab_counts(&self, categories: &[T::Category]) -> Vec<TabCount> {
        let visible = self.visible().len();

        std::iter::once(CategoryFilter::All)
            .chain(categories.iter().copied().map(CategoryFilter::Only))
            .map(|tab| {
                let active = tab == self.category;
                let count = if active {
                    visible
                } else {
                    self.items
                        .iter()
                        .filter(|item| tab.matches(item.category()))
                        .count()
                };

                TabCount {
                    label: tab.label(),
                    count,
                    active,
                }
            })
            .collect()
    }

    /// First featured record of the unfiltered list.
    pub fn featured(&self) -> Option<&T> {
        self.items.iter().find(|item| item.is_featured())
    }

    /// Visible items without the featured ones.
    pub fn regular(&self) -> Vec<&T> {
        self.visible()
            .into_iter()
            .filter(|item| !item.is_featured())
            .collect()
    }

    /// Blog listing only promotes its featured post on the unfiltered view.
    pub fn spotlight(&self) -> Option<&T> {
        if self.has_active_filters() {
            None
        } else {
            self.featured()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Game,
        Web,
        Systems,
    }

    impl fmt::Display for Kind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let label = match self {
                Kind::Game => "Game Development",
                Kind::Web => "Web Application",
                Kind::Systems => "System Programming",
            };
            f.write_str(label)
        }
    }

    impl FromStr for Kind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "Game Development" => Ok(Kind::Game),
                "Web Application" => Ok(Kind::Web),
                "System Programming" => Ok(Kind::Systems),
                other => Err(format!("unknown kind '{other}'")),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        title: String,
        summary: String,
        kind: Kind,
        tags: Vec<String>,
        featured: bool,
    }

    impl Searchable for Card {
        type Category = Kind;

        fn category(&self) -> Kind {
            self.kind
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn summary(&self) -> &str {
            &self.summary
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn is_featured(&self) -> bool {
            self.featured
        }
    }

    fn card(title: &str, kind: Kind, tags: &[&str]) -> Card {
        Card {
            title: title.to_string(),
            summary: format!("About {title}"),
            kind,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
        }
    }

    fn six_projects() -> Vec<Card> {
        vec![
            card("CAKS", Kind::Web, &["Next.js", "Supabase"]),
            card("Procurement Crawler", Kind::Web, &["Node.js", "Puppeteer"]),
            card("Neutron Prototype", Kind::Game, &["Unity", "C#"]),
            card("CHIP-8 Emulator", Kind::Systems, &["C++", "SDL2"]),
            card("P2P Transfer", Kind::Systems, &["C", "Sockets"]),
            card("Portfolio", Kind::Web, &["Rust"]),
        ]
    }

    fn titles(items: Vec<&Card>) -> Vec<String> {
        items.into_iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn defaults_show_everything() {
        let view = FilterView::new(six_projects());
        assert_eq!(view.visible().len(), 6);
        assert!(!view.has_active_filters());
    }

    #[test]
    fn category_filter_selects_single_game_project() {
        let mut view = FilterView::new(six_projects());
        view.set_category(CategoryFilter::Only(Kind::Game));

        assert_eq!(titles(view.visible()), vec!["Neutron Prototype"]);
    }

    #[test]
    fn category_filter_is_idempotent() {
        let mut view = FilterView::new(six_projects());
        view.set_category(CategoryFilter::Only(Kind::Web));
        let first = titles(view.visible());

        view.set_category(CategoryFilter::Only(Kind::Web));
        let second = titles(view.visible());

        assert_eq!(first, second);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let mut view = FilterView::new(six_projects());
        view.set_query("unity");

        assert_eq!(titles(view.visible()), vec!["Neutron Prototype"]);

        view.set_query("UNITY");
        assert_eq!(titles(view.visible()), vec!["Neutron Prototype"]);
    }

    #[test]
    fn search_matches_title_and_summary() {
        let mut view = FilterView::new(six_projects());

        view.set_query("emulator");
        assert_eq!(titles(view.visible()), vec!["CHIP-8 Emulator"]);

        view.set_query("about caks");
        assert_eq!(titles(view.visible()), vec!["CAKS"]);
    }

    #[test]
    fn longer_query_never_returns_more_results() {
        let mut view = FilterView::new(six_projects());
        let query = "procurement";
        let mut previous = usize::MAX;

        for end in 0..=query.len() {
            view.set_query(&query[..end]);
            let count = view.visible().len();
            assert!(count <= previous, "query '{}' widened results", &query[..end]);
            previous = count;
        }
    }

    #[test]
    fn category_and_query_are_anded() {
        let mut view = FilterView::new(six_projects());
        view.set_category(CategoryFilter::Only(Kind::Systems));
        view.set_query("c");

        assert_eq!(titles(view.visible()), vec!["CHIP-8 Emulator", "P2P Transfer"]);

        view.set_query("rust");
        assert!(view.visible().is_empty());
    }

    #[test]
    fn clear_filters_restores_defaults() {
        let mut view = FilterView::new(six_projects());
        view.set_category(CategoryFilter::Only(Kind::Game));
        view.set_query("nothing matches this");
        assert!(view.visible().is_empty());

        view.clear_filters();

        assert_eq!(view.category(), CategoryFilter::All);
        assert_eq!(view.query(), "");
        assert_eq!(view.visible().len(), 6);
    }

    #[test]
    fn parse_category_query_value() {
        assert_eq!(CategoryFilter::<Kind>::parse(None), Ok(CategoryFilter::All));
        assert_eq!(CategoryFilter::<Kind>::parse(Some("All")), Ok(CategoryFilter::All));
        assert_eq!(CategoryFilter::<Kind>::parse(Some("  ")), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::<Kind>::parse(Some("Game Development")),
            Ok(CategoryFilter::Only(Kind::Game))
        );
        assert!(CategoryFilter::<Kind>::parse(Some("Cooking")).is_err());
    }

    #[test]
    fn tab_counts_use_filtered_count_only_for_active_tab() {
        let mut view = FilterView::new(six_projects());
        view.set_category(CategoryFilter::Only(Kind::Web));
        view.set_query("node");

        let tabs = view.tab_counts(&[Kind::Web, Kind::Game, Kind::Systems]);

        assert_eq!(
            tabs,
            vec![
                TabCount { label: "All".into(), count: 6, active: false },
                TabCount { label: "Web Application".into(), count: 1, active: true },
                TabCount { label: "Game Development".into(), count: 1, active: false },
                TabCount { label: "System Programming".into(), count: 2, active: false },
            ]
        );
    }

    #[test]
    fn featured_comes_from_unfiltered_list() {
        let mut items = six_projects();
        items[3].featured = true;
        let mut view = FilterView::new(items);
        view.set_category(CategoryFilter::Only(Kind::Web));

        assert_eq!(view.featured().map(|c| c.title.as_str()), Some("CHIP-8 Emulator"));
        assert!(view.regular().iter().all(|c| !c.featured));
        assert_eq!(view.regular().len(), 3);
    }

    #[test]
    fn regular_excludes_featured_items() {
        let mut items = six_projects();
        items[0].featured = true;
        let view = FilterView::new(items);

        assert_eq!(view.regular().len(), 5);
        assert!(!titles(view.regular()).iter().any(|t| t == "CAKS"));
    }

    #[test]
    fn spotlight_hidden_while_filtering() {
        let mut items = six_projects();
        items[0].featured = true;
        let mut view = FilterView::new(items);

        assert!(view.spotlight().is_some());

        view.set_query("caks");
        assert!(view.spotlight().is_none());

        view.clear_filters();
        view.set_category(CategoryFilter::Only(Kind::Web));
        assert!(view.spotlight().is_none());
    }

    #[test]
    fn query_is_matched_as_typed() {
        let mut view = FilterView::new(six_projects());

        // A trailing space is part of the needle
        view.set_query("unity ");
        assert!(view.visible().is_empty());

        view.set_query(" ");
        assert!(view.has_active_filters());
    }

    #[test]
    fn whitespace_query_hides_spotlight() {
        let mut items = six_projects();
        items[0].featured = true;
        let mut view = FilterView::new(items);

        view.set_query(" ");
        assert!(view.spotlight().is_none());
    }
}
