use contracts::shared::message::MessageResponse;
use contracts::system::auth::Session;

use crate::shared::api_client::{ApiError, CatalogApi};

/// Submit a new product.
///
/// The session is checked before `build_form` runs, so an anonymous submit
/// neither assembles a payload nor touches the network.
pub async fn submit_product<A, F>(
    api: &A,
    session: &Session,
    build_form: F,
) -> Result<MessageResponse, ApiError>
where
    A: CatalogApi,
    F: FnOnce() -> Result<A::ProductForm, ApiError>,
{
    let token = session.token().ok_or(ApiError::Unauthorized)?;
    let form = build_form()?;
    api.add_product(token, form).await
}
