//! Admin category operations.
//!
//! Mutations never patch local state: each one finishes by re-listing the
//! categories so the panel always shows what the backend holds. A re-list
//! takes its `LatestOnly` ticket just before `GET /categories` is sent, so
//! requests rejected on the client never make an in-flight list stale.

use contracts::domain::a001_category::aggregate::{Category, CategoryId, CreateCategoryRequest};
use contracts::shared::message::MessageResponse;
use contracts::system::auth::Session;

use crate::shared::api_client::{ApiError, CatalogApi};
use crate::shared::latest::LatestOnly;

/// Outcome of an add/delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMutation {
    /// Server message, for success and rejection alike
    pub message: String,
    /// `false` when the backend refused the change (e.g. a duplicate name)
    pub accepted: bool,
    /// Fresh list, `None` if a newer list request overtook the re-list
    pub categories: Option<Vec<Category>>,
}

fn require_token(session: &Session) -> Result<&str, ApiError> {
    session.token().ok_or(ApiError::Unauthorized)
}

/// A server rejection still carries a message and still triggers a re-list.
fn settle(result: Result<MessageResponse, ApiError>) -> Result<(String, bool), ApiError> {
    match result {
        Ok(response) => Ok((response.message, true)),
        Err(ApiError::Status { message, .. }) => Ok((message, false)),
        Err(e) => Err(e),
    }
}

async fn relist<A: CatalogApi>(
    api: &A,
    latest: &LatestOnly,
    token: &str,
) -> Result<Option<Vec<Category>>, ApiError> {
    let ticket = latest.issue();
    let categories = api.categories(token).await?;
    if ticket.is_current() {
        Ok(Some(categories))
    } else {
        log::debug!("Dropping stale category list (ticket {})", ticket.id());
        Ok(None)
    }
}

/// Fetch the category list. `Ok(None)` means a newer request superseded it.
pub async fn list_categories<A: CatalogApi>(
    api: &A,
    latest: &LatestOnly,
    session: &Session,
) -> Result<Option<Vec<Category>>, ApiError> {
    let token = require_token(session)?;
    relist(api, latest, token).await
}

pub async fn add_category<A: CatalogApi>(
    api: &A,
    latest: &LatestOnly,
    session: &Session,
    name: &str,
) -> Result<CategoryMutation, ApiError> {
    let request = CreateCategoryRequest::from_input(name).ok_or(ApiError::EmptyCategoryName)?;
    let token = require_token(session)?;

    let (message, accepted) = settle(api.create_category(token, &request).await)?;
    let categories = relist(api, latest, token).await?;

    Ok(CategoryMutation {
        message,
        accepted,
        categories,
    })
}

pub async fn delete_category<A: CatalogApi>(
    api: &A,
    latest: &LatestOnly,
    session: &Session,
    id: CategoryId,
) -> Result<CategoryMutation, ApiError> {
    let token = require_token(session)?;

    let (message, accepted) = settle(api.delete_category(token, id).await)?;
    let categories = relist(api, latest, token).await?;

    Ok(CategoryMutation {
        message,
        accepted,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{Call, FakeApi};
    use futures::executor::block_on;

    fn admin() -> Session {
        Session::authenticated("token-admin", "admin")
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.name.as_str()).collect()
    }

    fn get_categories() -> Call {
        Call::GetCategories {
            token: "token-admin".into(),
        }
    }

    #[test]
    fn test_list_requires_session() {
        let api = FakeApi::with_categories(&["Protein"]);
        let latest = LatestOnly::new();
        let err = block_on(list_categories(&api, &latest, &Session::Anonymous)).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_list_sends_token() {
        let api = FakeApi::with_categories(&["Protein", "Gear"]);
        let list = block_on(list_categories(&api, &LatestOnly::new(), &admin()))
            .unwrap()
            .unwrap();
        assert_eq!(names(&list), vec!["Protein", "Gear"]);
        assert_eq!(api.calls(), vec![get_categories()]);
    }

    #[test]
    fn test_overtaken_list_is_dropped() {
        let api = FakeApi::with_categories(&["Protein"]);
        let latest = LatestOnly::new();
        *api.overtaken_by.borrow_mut() = Some(latest.clone());

        let list = block_on(list_categories(&api, &latest, &admin())).unwrap();
        assert_eq!(list, None);
    }

    #[test]
    fn test_add_empty_name_makes_no_call() {
        let api = FakeApi::default();
        let latest = LatestOnly::new();
        assert_eq!(
            block_on(add_category(&api, &latest, &admin(), "")).unwrap_err(),
            ApiError::EmptyCategoryName
        );
        assert_eq!(
            block_on(add_category(&api, &latest, &admin(), "   ")).unwrap_err(),
            ApiError::EmptyCategoryName
        );
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_add_without_session_makes_no_call() {
        let api = FakeApi::default();
        let err = block_on(add_category(
            &api,
            &LatestOnly::new(),
            &Session::Anonymous,
            "Vitamins",
        ))
        .unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_rejected_input_keeps_pending_list_current() {
        let api = FakeApi::with_categories(&["Protein"]);
        let latest = LatestOnly::new();
        // initial list still loading
        let pending = latest.issue();

        block_on(add_category(&api, &latest, &admin(), "")).unwrap_err();
        block_on(add_category(&api, &latest, &Session::Anonymous, "Gear")).unwrap_err();
        block_on(delete_category(&api, &latest, &Session::Anonymous, 1)).unwrap_err();

        assert!(pending.is_current());
    }

    #[test]
    fn test_add_refetches_list() {
        let api = FakeApi::with_categories(&["Protein"]);
        let latest = LatestOnly::new();
        let session = admin();

        block_on(list_categories(&api, &latest, &session)).unwrap();
        let outcome = block_on(add_category(&api, &latest, &session, "Vitamins")).unwrap();

        assert_eq!(outcome.message, "Category added successfully");
        assert!(outcome.accepted);
        assert_eq!(
            names(outcome.categories.as_deref().unwrap()),
            vec!["Protein", "Vitamins"]
        );
        assert_eq!(api.count(|c| matches!(c, Call::GetCategories { .. })), 2);
        assert_eq!(
            api.calls(),
            vec![
                get_categories(),
                Call::PostCategory {
                    token: "token-admin".into(),
                    name: "Vitamins".into()
                },
                get_categories(),
            ]
        );
    }

    #[test]
    fn test_mutation_relist_supersedes_older_list() {
        let api = FakeApi::with_categories(&["Protein"]);
        let latest = LatestOnly::new();
        let pending = latest.issue();

        let outcome = block_on(add_category(&api, &latest, &admin(), "Gear")).unwrap();

        assert!(!pending.is_current());
        assert!(outcome.categories.is_some());
    }

    #[test]
    fn test_delete_refetches_list() {
        let api = FakeApi::with_categories(&["Protein", "Gear"]);
        let outcome = block_on(delete_category(&api, &LatestOnly::new(), &admin(), 1)).unwrap();

        assert_eq!(outcome.message, "Category deleted");
        assert_eq!(names(outcome.categories.as_deref().unwrap()), vec!["Gear"]);
        assert_eq!(
            api.calls()[0],
            Call::DeleteCategory {
                token: "token-admin".into(),
                id: 1
            }
        );
        assert_eq!(api.count(|c| matches!(c, Call::GetCategories { .. })), 1);
    }

    #[test]
    fn test_delete_without_session_makes_no_call() {
        let api = FakeApi::with_categories(&["Protein"]);
        assert_eq!(
            block_on(delete_category(&api, &LatestOnly::new(), &Session::Anonymous, 1))
                .unwrap_err(),
            ApiError::Unauthorized
        );
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_server_rejection_still_relists() {
        let api = FakeApi::with_categories(&["Protein"]);
        *api.reject_mutations_with.borrow_mut() = Some(ApiError::Status {
            status: 400,
            message: "Category already exists".into(),
        });

        let outcome = block_on(add_category(&api, &LatestOnly::new(), &admin(), "Protein")).unwrap();

        assert!(!outcome.accepted);
        assert_eq!(outcome.message, "Category already exists");
        assert_eq!(names(outcome.categories.as_deref().unwrap()), vec!["Protein"]);
        assert_eq!(
            api.calls(),
            vec![
                Call::PostCategory {
                    token: "token-admin".into(),
                    name: "Protein".into()
                },
                get_categories(),
            ]
        );
    }

    #[test]
    fn test_rejected_delete_still_relists() {
        let api = FakeApi::with_categories(&["Protein"]);
        *api.reject_mutations_with.borrow_mut() = Some(ApiError::Status {
            status: 403,
            message: "Unauthorized".into(),
        });

        let outcome = block_on(delete_category(&api, &LatestOnly::new(), &admin(), 1)).unwrap();

        assert!(!outcome.accepted);
        assert_eq!(names(outcome.categories.as_deref().unwrap()), vec!["Protein"]);
    }

    #[test]
    fn test_network_failure_skips_refetch() {
        let api = FakeApi::with_categories(&["Protein"]);
        *api.fail_with.borrow_mut() = Some(ApiError::Network("offline".into()));
        let err = block_on(add_category(&api, &LatestOnly::new(), &admin(), "Gear")).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
        assert_eq!(api.calls().len(), 1);
    }
}
