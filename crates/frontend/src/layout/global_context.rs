use leptos::prelude::*;

/// Every screen the app can show. Detail pages carry the entity id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Articles,
    ArticleDetails(i64),
    Arrivals,
    Distributions,
    Reparations,
    Persons,
    PersonDetails(i64),
    Structures,
    StructureDetails(i64),
    Operations,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Articles | Page::ArticleDetails(_) => "Articles",
            Page::Arrivals => "Arrivals",
            Page::Distributions => "Distributions",
            Page::Reparations => "Repairs",
            Page::Persons | Page::PersonDetails(_) => "Persons",
            Page::Structures | Page::StructureDetails(_) => "Structures",
            Page::Operations => "Operations",
        }
    }

    /// The sidebar entry a page belongs to.
    pub fn section(&self) -> Page {
        match self {
            Page::ArticleDetails(_) => Page::Articles,
            Page::PersonDetails(_) => Page::Persons,
            Page::StructureDetails(_) => Page::Structures,
            other => *other,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Dashboard),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_map_to_their_list_section() {
        assert_eq!(Page::ArticleDetails(7).section(), Page::Articles);
        assert_eq!(Page::PersonDetails(2).section(), Page::Persons);
        assert_eq!(Page::StructureDetails(4).section(), Page::Structures);
        assert_eq!(Page::Arrivals.section(), Page::Arrivals);
    }
}
