use contracts::domain::common::DraftError;
use thiserror::Error;

use super::client::EntityWriter;
use crate::shared::api_utils::ApiError;

/// Whether a form creates a new entity or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> FormMode<Id> {
    /// Edit mode exactly when there is an entity being edited
    pub fn from_editing(editing: Option<Id>) -> Self {
        match editing {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Submitting flag: a second submit is refused while one is in flight.
///
/// Only prevents duplicate clicks in this page; it is not a server lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    submitting: bool,
}

impl SubmitGuard {
    /// Returns false when a submission is already running
    pub fn try_begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FormError::Draft(e) => e.message_key(),
            FormError::Api(e) => e.message_key(),
        }
    }
}

/// Send the prepared payload with create or update depending on `mode`.
///
/// A draft that failed to build never reaches the client.
pub async fn submit<C: EntityWriter>(
    client: &C,
    mode: &FormMode<C::Id>,
    payload: Result<C::Payload, DraftError>,
) -> Result<C::Entity, FormError> {
    let payload = payload?;
    let saved = match mode {
        FormMode::Create => client.create(&payload).await,
        FormMode::Edit(id) => client.update(id, &payload).await,
    };
    match saved {
        Ok(entity) => {
            log::info!("{} succeeded", if mode.is_edit() { "update" } else { "create" });
            Ok(entity)
        }
        Err(e) => {
            log::error!("submit failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::client::EntityReader;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClient {
        calls: RefCell<Vec<String>>,
        fail_with: Option<ApiError>,
    }

    impl EntityReader for RecordingClient {
        type Id = u32;
        type Entity = String;
        type Filter = ();

        async fn list(&self, _filter: &()) -> Result<Vec<String>, ApiError> {
            Ok(Vec::new())
        }

        async fn get(&self, id: &u32) -> Result<String, ApiError> {
            Ok(id.to_string())
        }
    }

    impl EntityWriter for RecordingClient {
        type Payload = String;

        async fn create(&self, payload: &String) -> Result<String, ApiError> {
            self.calls.borrow_mut().push(format!("create {payload}"));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(payload.clone()),
            }
        }

        async fn update(&self, id: &u32, payload: &String) -> Result<String, ApiError> {
            self.calls.borrow_mut().push(format!("update {id} {payload}"));
            Ok(payload.clone())
        }

        async fn deactivate(&self, id: &u32) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("deactivate {id}"));
            Ok(())
        }
    }

    #[test]
    fn test_mode_selects_create_or_update() {
        let client = RecordingClient::default();
        block_on(submit(&client, &FormMode::Create, Ok("a".to_string()))).unwrap();
        block_on(submit(&client, &FormMode::Edit(7), Ok("b".to_string()))).unwrap();
        assert_eq!(*client.calls.borrow(), vec!["create a", "update 7 b"]);
    }

    #[test]
    fn test_invalid_draft_is_not_sent() {
        let client = RecordingClient::default();
        let result = block_on(submit(
            &client,
            &FormMode::Create,
            Err(DraftError::MissingField("name")),
        ));
        assert_eq!(
            result,
            Err(FormError::Draft(DraftError::MissingField("name")))
        );
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn test_server_rejection_is_reported() {
        let client = RecordingClient {
            fail_with: Some(ApiError::Validation("duplicate".to_string())),
            ..Default::default()
        };
        let result = block_on(submit(&client, &FormMode::Create, Ok("a".to_string())));
        let err = result.unwrap_err();
        assert_eq!(err.message_key(), "error.validation");
    }

    #[test]
    fn test_submit_guard_blocks_duplicates() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(guard.is_submitting());
        assert!(!guard.try_begin());
        guard.finish();
        assert!(guard.try_begin());
    }

    #[test]
    fn test_mode_from_editing() {
        assert_eq!(FormMode::<u32>::from_editing(None), FormMode::Create);
        assert!(FormMode::from_editing(Some(3)).is_edit());
    }
}
