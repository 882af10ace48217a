//! Typed client for the catalog backend.
//!
//! `CatalogApi` is the seam between page logic and HTTP: the browser build
//! uses `HttpCatalogApi`, tests plug in an in-memory recorder.

use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryId, CreateCategoryRequest};
use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::message::MessageResponse;
use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::api_utils::{api_base, join_url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Category name is empty")]
    EmptyCategoryName,
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Short text for a toast. Server-provided messages are shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[async_trait(?Send)]
pub trait CatalogApi {
    /// Multipart payload for `POST /add-product`
    type ProductForm: 'static;

    async fn products(&self) -> Result<Vec<Product>, ApiError>;

    async fn categories(&self, token: &str) -> Result<Vec<Category>, ApiError>;

    async fn create_category(
        &self,
        token: &str,
        request: &CreateCategoryRequest,
    ) -> Result<MessageResponse, ApiError>;

    async fn delete_category(&self, token: &str, id: CategoryId)
        -> Result<MessageResponse, ApiError>;

    async fn add_product(
        &self,
        token: &str,
        form: Self::ProductForm,
    ) -> Result<MessageResponse, ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}

/// `CatalogApi` over `fetch`, via gloo-net
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    base: String,
}

impl HttpCatalogApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the configured backend
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Decode a JSON body, turning non-2xx responses into `ApiError::Status`
/// with the backend's `{message}` when it sent one.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<MessageResponse>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {}", status),
        };
        return Err(ApiError::Status { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    type ProductForm = web_sys::FormData;

    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&self.url("/products")).send().await?;
        read_json(response).await
    }

    async fn categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let response = Request::get(&self.url("/categories"))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_category(
        &self,
        token: &str,
        request: &CreateCategoryRequest,
    ) -> Result<MessageResponse, ApiError> {
        let response = Request::post(&self.url("/categories"))
            .header("Authorization", &bearer(token))
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete_category(
        &self,
        token: &str,
        id: CategoryId,
    ) -> Result<MessageResponse, ApiError> {
        let response = Request::delete(&self.url(&format!("/categories/{}", id)))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        read_json(response).await
    }

    async fn add_product(
        &self,
        token: &str,
        form: web_sys::FormData,
    ) -> Result<MessageResponse, ApiError> {
        // The browser sets the multipart boundary itself; no Content-Type here.
        let response = Request::post(&self.url("/add-product"))
            .header("Authorization", &bearer(token))
            .body(form)?
            .send()
            .await?;
        read_json(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&self.url("/api/login"))
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let response = Request::post(&self.url("/api/register"))
            .json(request)?
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording in-memory backend

    use super::*;
    use crate::shared::latest::LatestOnly;
    use contracts::domain::a002_product::aggregate::Price;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        GetProducts,
        GetCategories { token: String },
        PostCategory { token: String, name: String },
        DeleteCategory { token: String, id: CategoryId },
        AddProduct { token: String, fields: Vec<(String, String)> },
        Login { username: String },
        Register { username: String },
    }

    #[derive(Default)]
    pub struct FakeApi {
        pub products: RefCell<Vec<Product>>,
        pub categories: RefCell<Vec<Category>>,
        pub calls: RefCell<Vec<Call>>,
        /// When set, every call fails with this error
        pub fail_with: RefCell<Option<ApiError>>,
        /// When set, category create/delete fail with this error
        pub reject_mutations_with: RefCell<Option<ApiError>>,
        /// When set, a newer request is started on this sequencer while
        /// `GET /products` or `GET /categories` is in flight
        pub overtaken_by: RefCell<Option<LatestOnly>>,
        /// Role returned by a successful login
        pub role: String,
    }

    impl FakeApi {
        pub fn with_products(products: Vec<Product>) -> Self {
            Self {
                products: RefCell::new(products),
                ..Default::default()
            }
        }

        pub fn with_categories(names: &[&str]) -> Self {
            let categories = names
                .iter()
                .enumerate()
                .map(|(i, n)| Category {
                    id: i as i64 + 1,
                    name: n.to_string(),
                })
                .collect();
            Self {
                categories: RefCell::new(categories),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.borrow().iter().filter(|c| pred(c)).count()
        }

        fn reject_mutation(&self) -> Result<(), ApiError> {
            match self.reject_mutations_with.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match self.fail_with.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    pub fn product(name: &str, price: f64, category: &str) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: None,
            price: Price::new(price),
            category: category.to_string(),
            image_url: None,
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for FakeApi {
        type ProductForm = Vec<(String, String)>;

        async fn products(&self) -> Result<Vec<Product>, ApiError> {
            if let Some(latest) = self.overtaken_by.borrow().as_ref() {
                latest.issue();
            }
            self.record(Call::GetProducts)?;
            Ok(self.products.borrow().clone())
        }

        async fn categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
            if let Some(latest) = self.overtaken_by.borrow().as_ref() {
                latest.issue();
            }
            self.record(Call::GetCategories {
                token: token.to_string(),
            })?;
            Ok(self.categories.borrow().clone())
        }

        async fn create_category(
            &self,
            token: &str,
            request: &CreateCategoryRequest,
        ) -> Result<MessageResponse, ApiError> {
            self.record(Call::PostCategory {
                token: token.to_string(),
                name: request.name.clone(),
            })?;
            self.reject_mutation()?;
            let mut categories = self.categories.borrow_mut();
            let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            categories.push(Category {
                id,
                name: request.name.clone(),
            });
            Ok(MessageResponse {
                message: "Category added successfully".to_string(),
            })
        }

        async fn delete_category(
            &self,
            token: &str,
            id: CategoryId,
        ) -> Result<MessageResponse, ApiError> {
            self.record(Call::DeleteCategory {
                token: token.to_string(),
                id,
            })?;
            self.reject_mutation()?;
            self.categories.borrow_mut().retain(|c| c.id != id);
            Ok(MessageResponse {
                message: "Category deleted".to_string(),
            })
        }

        async fn add_product(
            &self,
            token: &str,
            form: Vec<(String, String)>,
        ) -> Result<MessageResponse, ApiError> {
            self.record(Call::AddProduct {
                token: token.to_string(),
                fields: form,
            })?;
            Ok(MessageResponse {
                message: "Product added successfully".to_string(),
            })
        }

        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.record(Call::Login {
                username: request.username.clone(),
            })?;
            Ok(LoginResponse {
                access_token: format!("token-{}", request.username),
                role: self.role.clone(),
            })
        }

        async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
            self.record(Call::Register {
                username: request.username.clone(),
            })?;
            Ok(RegisterResponse {
                message: "Registered".to_string(),
                role: Some("user".to_string()),
            })
        }
    }
}
