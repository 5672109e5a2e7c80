//! Client-side mirror of a paginated REST collection
//!
//! Plain data with no reactive or browser dependencies; the entity stores wrap
//! it in a signal. The held list is always exactly the most recent successful
//! response for the latest dispatched request. Nothing is merged.

use contracts::domain::common::{EntityId, Identified};
use contracts::shared::pagination::{ListResponse, PageMeta};

use crate::shared::api_utils::ApiError;

/// Identifies one dispatched fetch. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Monotonic request counter used to drop responses that arrive after a
/// newer request was dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub meta: PageMeta,
    pub search_term: String,
    seq: RequestSeq,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            meta: PageMeta::default(),
            search_term: String::new(),
            seq: RequestSeq::default(),
        }
    }
}

impl<T: Identified> ListState<T> {
    /// Mark a list fetch as in flight and hand out its ticket
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.seq.next()
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` when a newer fetch has been dispatched since; the
    /// result is then dropped and the state is left untouched. On failure
    /// the previous items and meta stay in place and `failure_message` is
    /// recorded.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListResponse<T>, ApiError>,
        failure_message: &str,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("dropping stale list response {:?}", ticket);
            return false;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                let fallback = PageMeta {
                    total: response.data.len() as u64,
                    ..PageMeta::default()
                };
                self.meta = response.meta.unwrap_or(fallback);
                self.items = response.data;
            }
            Err(e) => {
                log::warn!("{}: {}", failure_message, e);
                self.error = Some(failure_message.to_string());
            }
        }
        true
    }

    /// Drop `id` from the held page after the server confirmed its deletion.
    ///
    /// `meta` is left as is; it is refreshed by the next fetch.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.entity_id() != id);
        self.items.len() != before
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Nothing to show yet while the first page is still loading
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// Unpaginated collection used to populate relationship pickers
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    seq: RequestSeq,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seq: RequestSeq::default(),
        }
    }
}

impl<T> CollectionState<T> {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq.next()
    }

    /// Replace the items with `result` if `ticket` is still current.
    /// A failure keeps the previous items.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.seq.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => self.items = items,
            Err(e) => log::warn!("picker collection fetch failed: {}", e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_movie::aggregate::Movie;

    fn movie(id: EntityId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            synopsis: String::new(),
            release_year: 2000,
            created_at: String::new(),
            updated_at: String::new(),
            categories: None,
            link: None,
        }
    }

    fn page(items: Vec<Movie>, total: u64, page: u32, last_page: u32) -> ListResponse<Movie> {
        ListResponse {
            data: items,
            meta: Some(PageMeta {
                total,
                page,
                last_page,
            }),
        }
    }

    fn titles(state: &ListState<Movie>) -> Vec<&str> {
        state.items.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_success_replaces_items_and_meta() {
        let mut state = ListState::default();
        let t1 = state.begin_fetch();
        state.finish_fetch(t1, Ok(page(vec![movie(1, "A"), movie(2, "B")], 12, 1, 2)), "err");

        let t2 = state.begin_fetch();
        assert!(state.loading);
        let applied = state.finish_fetch(t2, Ok(page(vec![movie(3, "C")], 12, 2, 2)), "err");

        assert!(applied);
        assert!(!state.loading);
        assert_eq!(titles(&state), vec!["C"]);
        assert_eq!(
            state.meta,
            PageMeta {
                total: 12,
                page: 2,
                last_page: 2
            }
        );
    }

    #[test]
    fn test_failure_keeps_previous_list() {
        let mut state = ListState::default();
        let t1 = state.begin_fetch();
        state.finish_fetch(t1, Ok(page(vec![movie(1, "A")], 1, 1, 1)), "err");

        let t2 = state.begin_fetch();
        state.finish_fetch(t2, Err(ApiError::Status(500)), "Error al cargar películas");

        assert_eq!(titles(&state), vec!["A"]);
        assert_eq!(state.meta.total, 1);
        assert_eq!(state.error.as_deref(), Some("Error al cargar películas"));
        assert!(!state.loading);

        // the next attempt clears the error
        state.begin_fetch();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_out_of_order_responses_keep_latest_request() {
        let mut state = ListState::default();
        let page1 = state.begin_fetch();
        let page2 = state.begin_fetch();

        // page 2 arrives first, then the stale page 1
        assert!(state.finish_fetch(page2, Ok(page(vec![movie(2, "Page two")], 2, 2, 2)), "err"));
        assert!(!state.finish_fetch(page1, Ok(page(vec![movie(1, "Page one")], 2, 1, 2)), "err"));

        assert_eq!(titles(&state), vec!["Page two"]);
        assert_eq!(state.meta.page, 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut state: ListState<Movie> = ListState::default();
        let old = state.begin_fetch();
        let _new = state.begin_fetch();

        state.finish_fetch(old, Err(ApiError::Network("offline".into())), "err");
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_remove_keeps_meta_stale() {
        let mut state = ListState::default();
        let t = state.begin_fetch();
        state.finish_fetch(
            t,
            Ok(page(vec![movie(5, "E"), movie(7, "G"), movie(9, "I")], 3, 1, 1)),
            "err",
        );

        assert!(state.remove(7));
        assert_eq!(titles(&state), vec!["E", "I"]);
        assert_eq!(state.meta.total, 3);

        assert!(!state.remove(7));
    }

    #[test]
    fn test_missing_meta_falls_back_to_single_page() {
        let mut state = ListState::default();
        let t = state.begin_fetch();
        state.finish_fetch(
            t,
            Ok(ListResponse {
                data: vec![movie(1, "A"), movie(2, "B")],
                meta: None,
            }),
            "err",
        );
        assert_eq!(
            state.meta,
            PageMeta {
                total: 2,
                page: 1,
                last_page: 1
            }
        );
    }

    #[test]
    fn test_loading_flags() {
        let mut state: ListState<Movie> = ListState::default();
        assert!(state.is_empty());
        let t = state.begin_fetch();
        assert!(state.is_initial_loading());
        assert!(!state.is_empty());
        state.finish_fetch(t, Ok(page(vec![], 0, 1, 1)), "err");
        assert!(state.is_empty());
    }

    #[test]
    fn test_search_response_from_server_json() {
        let body = serde_json::json!({
            "data": [{
                "id": 4,
                "title": "Mad Max",
                "synopsis": "Persecución en el desierto",
                "releaseYear": 2015,
                "createdAt": "2024-01-02T10:00:00.000Z",
                "updatedAt": "2024-01-02T10:00:00.000Z",
                "Categories": [{
                    "id": 1,
                    "name": "Acción",
                    "description": "",
                    "MovieCategory": { "movieId": 4, "categoryId": 1 }
                }]
            }],
            "meta": { "total": 1, "page": 1, "lastPage": 1 }
        });
        let response: ListResponse<Movie> = serde_json::from_value(body).unwrap();

        let mut state = ListState::default();
        state.set_search_term("Mad".to_string());
        let t = state.begin_fetch();
        state.finish_fetch(t, Ok(response), "err");

        assert_eq!(titles(&state), vec!["Mad Max"]);
        assert_eq!(state.items[0].category_names(), vec!["Acción"]);
        assert_eq!(state.search_term, "Mad");
        assert!(!state.meta.has_more_pages());
    }

    #[test]
    fn test_collection_drops_stale_and_keeps_items_on_error() {
        let mut all: CollectionState<Movie> = CollectionState::default();
        let first = all.begin_fetch();
        let second = all.begin_fetch();

        assert!(all.finish_fetch(second, Ok(vec![movie(1, "A")])));
        assert!(!all.finish_fetch(first, Ok(vec![])));
        assert_eq!(all.items.len(), 1);

        let third = all.begin_fetch();
        all.finish_fetch(third, Err(ApiError::Status(503)));
        assert_eq!(all.items.len(), 1);
    }
}
