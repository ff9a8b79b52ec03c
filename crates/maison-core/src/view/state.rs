// Addressable view state and its URL query form.

use url::form_urlencoded;

use crate::model::ResourceTag;

const TAB_KEY: &str = "tab";
const PAGE_KEY: &str = "page";
const SEARCH_KEY: &str = "q";

/// The part of the dashboard view that survives a reload or a shared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub tab: ResourceTag,
    /// 1-based.
    pub page: u32,
    pub search: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: ResourceTag::default(),
            page: 1,
            search: String::new(),
        }
    }
}

impl ViewState {
    /// Parse a query string (leading `?` optional). Unknown or malformed
    /// values fall back to their defaults.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                TAB_KEY => state.tab = value.parse().unwrap_or_default(),
                PAGE_KEY => {
                    state.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                SEARCH_KEY => state.search = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Encode as a query string, omitting default page and empty search.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(TAB_KEY, <&'static str>::from(self.tab));
        if self.page != 1 {
            serializer.append_pair(PAGE_KEY, &self.page.to_string());
        }
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_KEY, &self.search);
        }
        serializer.finish()
    }

    /// Switch tab. Page and search never carry over to another tab.
    pub fn with_tab(&self, tab: ResourceTag) -> Self {
        Self {
            tab,
            page: 1,
            search: String::new(),
        }
    }

    /// Change page within the tab, keeping the search.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Change the search. A new search starts from the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            tab: self.tab,
        }
    }
}
