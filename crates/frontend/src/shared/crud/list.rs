use super::client::{EntityReader, EntityWriter};
use crate::shared::api_utils::ApiError;

/// Fetch state of a list page
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Failed(ApiError),
    Loaded(Vec<T>),
}

/// What a list page renders for its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error,
    Empty,
    Rows,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(e) => ListState::Failed(e),
        }
    }

    pub fn view(&self) -> ListView {
        match self {
            ListState::Loading => ListView::Loading,
            ListState::Failed(_) => ListView::Error,
            ListState::Loaded(items) if items.is_empty() => ListView::Empty,
            ListState::Loaded(_) => ListView::Rows,
        }
    }

    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> ListState<U> {
        match self {
            ListState::Loading => ListState::Loading,
            ListState::Failed(e) => ListState::Failed(e),
            ListState::Loaded(items) => ListState::Loaded(items.into_iter().map(f).collect()),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ListState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Sequence counter so that only the newest fetch of a page is applied
/// when the filter changes while an older request is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued == ticket
    }
}

/// Outcome of a deactivation followed by a reload
#[derive(Debug, Clone, PartialEq)]
pub enum Deactivation<T> {
    /// The server refused the DELETE; nothing changed
    Rejected(ApiError),
    /// The entity is deactivated; carries the result of the reload
    Done(Result<Vec<T>, ApiError>),
}

impl<T> Deactivation<T> {
    pub fn succeeded(&self) -> bool {
        matches!(self, Deactivation::Done(_))
    }

    /// List state to apply. `None` when the DELETE was rejected or a newer
    /// request owns the list by the time the reload lands.
    pub fn into_list_state(self, is_current: bool) -> Option<ListState<T>> {
        match self {
            Deactivation::Done(result) if is_current => Some(ListState::from_result(result)),
            _ => None,
        }
    }
}

/// Deactivate one entity and fetch the list again. The list is never patched
/// locally; the server decides what remains visible.
pub async fn deactivate_and_reload<C: EntityWriter>(
    client: &C,
    id: &C::Id,
    filter: &C::Filter,
) -> Deactivation<C::Entity> {
    if let Err(e) = client.deactivate(id).await {
        log::error!("deactivate failed: {}", e);
        return Deactivation::Rejected(e);
    }
    log::info!("entity deactivated, reloading list");
    let reloaded = client.list(filter).await;
    if let Err(e) = &reloaded {
        log::error!("reload after deactivation failed: {}", e);
    }
    Deactivation::Done(reloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        active: bool,
    }

    struct InMemory {
        items: RefCell<Vec<Item>>,
        deactivated: RefCell<Vec<u32>>,
    }

    impl InMemory {
        fn with(ids: &[u32]) -> Self {
            Self {
                items: RefCell::new(ids.iter().map(|&id| Item { id, active: true }).collect()),
                deactivated: RefCell::new(Vec::new()),
            }
        }
    }

    impl EntityReader for InMemory {
        type Id = u32;
        type Entity = Item;
        type Filter = bool;

        async fn list(&self, active_only: &bool) -> Result<Vec<Item>, ApiError> {
            Ok(self
                .items
                .borrow()
                .iter()
                .filter(|i| !*active_only || i.active)
                .cloned()
                .collect())
        }

        async fn get(&self, id: &u32) -> Result<Item, ApiError> {
            self.items
                .borrow()
                .iter()
                .find(|i| i.id == *id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }
    }

    impl EntityWriter for InMemory {
        type Payload = ();

        async fn create(&self, _: &()) -> Result<Item, ApiError> {
            Err(ApiError::Server(501))
        }

        async fn update(&self, _: &u32, _: &()) -> Result<Item, ApiError> {
            Err(ApiError::Server(501))
        }

        async fn deactivate(&self, id: &u32) -> Result<(), ApiError> {
            let mut items = self.items.borrow_mut();
            let item = items
                .iter_mut()
                .find(|i| i.id == *id)
                .ok_or(ApiError::NotFound)?;
            item.active = false;
            self.deactivated.borrow_mut().push(*id);
            Ok(())
        }
    }

    #[test]
    fn test_deactivated_entity_disappears_from_active_list() {
        let client = InMemory::with(&[1, 2, 3]);
        let outcome = block_on(deactivate_and_reload(&client, &2, &true));
        assert!(outcome.succeeded());
        let state = outcome.into_list_state(true).unwrap();
        let items = state.items();

        assert_eq!(*client.deactivated.borrow(), vec![2]);
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        // soft delete: still there when inactive rows are requested
        let all = block_on(client.list(&false)).unwrap();
        assert_eq!(all.len(), 3);
        assert!(!all[1].active);
    }

    #[test]
    fn test_failed_deactivation_skips_reload() {
        let client = InMemory::with(&[1]);
        let result = block_on(deactivate_and_reload(&client, &9, &true));
        assert_eq!(result, Deactivation::Rejected(ApiError::NotFound));
        assert!(!result.succeeded());
        assert!(client.deactivated.borrow().is_empty());
    }

    #[test]
    fn test_stale_reload_still_reports_deactivation() {
        let client = InMemory::with(&[1, 2]);
        let mut latest = LatestRequest::default();
        let ticket = latest.begin();

        let outcome = block_on(deactivate_and_reload(&client, &1, &true));
        // filter changed while the request was in flight
        latest.begin();

        assert!(outcome.succeeded());
        assert_eq!(outcome.into_list_state(latest.is_current(ticket)), None);
        assert_eq!(*client.deactivated.borrow(), vec![1]);
    }

    #[test]
    fn test_list_view_classification() {
        assert_eq!(ListState::<u32>::Loading.view(), ListView::Loading);
        assert_eq!(
            ListState::<u32>::Failed(ApiError::Server(500)).view(),
            ListView::Error
        );
        assert_eq!(ListState::<u32>::Loaded(vec![]).view(), ListView::Empty);
        assert_eq!(ListState::Loaded(vec![1]).view(), ListView::Rows);
        assert!(ListState::<u32>::Loading.items().is_empty());
    }

    #[test]
    fn test_from_result() {
        let state = ListState::<u32>::from_result(Err(ApiError::NotFound));
        assert_eq!(state.error(), Some(&ApiError::NotFound));
        assert_eq!(ListState::from_result(Ok(vec![5])).items(), &[5]);
        assert_eq!(
            ListState::Loaded(vec![2, 3]).map_items(|n| n * 10).items(),
            &[20, 30]
        );
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let mut latest = LatestRequest::default();
        let first = latest.begin();
        let second = latest.begin();
        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }
}
