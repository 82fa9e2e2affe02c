pub mod models;

use std::path::Path;
use std::time::{Duration, Instant};

use reqwest::header::HeaderValue;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, debug_span};
use url::Url;

use crate::errors::Result;
use self::models::PetFilter;

/// Production endpoint of the PetFriends service.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru/";

// =========================== Response pair ===================================

/// Status + parsed body pair returned by every client operation.
///
/// Non-2xx statuses are not errors: the pair is handed back as-is and the
/// caller asserts on the raw code. The body is parsed as JSON when possible;
/// the service answers bare text on auth failures, which is kept verbatim as
/// a JSON string value.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    async fn read(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status();
        let text = resp.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(Self { status, body })
    }

    /// Deserialize the body into a typed model.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

// ============================== Client =======================================

/// Thin wrapper over the PetFriends REST API.
///
/// Holds one `reqwest::Client` for its whole lifetime; calls are sequential
/// and stateless between each other. No retries, no error translation: the
/// remote status code is surfaced untouched.
pub struct PetFriends {
    client: Client,
    base_url: Url,
}

impl PetFriends {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        let client = Client::builder()
            // Keep one warm session across the whole run
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()?;
        Ok(Self { client, base_url })
    }

    // -------------------- Operations ----------------------------------------

    /// Request an auth key for the account. Credentials travel as `email` and
    /// `password` request headers; the success body carries a `key` field.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let req = self
            .client
            .get(self.endpoint("api/key")?)
            .header("email", header_value(email)?)
            .header("password", header_value(password)?);
        self.execute("get_api_key", req).await
    }

    /// List pets under the given filter, `PetFilter::All` for the full list
    /// or `PetFilter::MyPets` for the account's own pets.
    pub async fn get_list_of_pets(&self, auth_key: &str, filter: PetFilter) -> Result<ApiResponse> {
        let req = self
            .client
            .get(self.endpoint("api/pets")?)
            .header("auth_key", header_value(auth_key)?)
            .query(&[("filter", filter.as_str())]);
        self.execute("get_list_of_pets", req).await
    }

    /// Create a pet with a photo: multipart upload of the text fields plus
    /// the file at `photo_path`. A missing file fails locally with an I/O
    /// error before any request is issued.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        let form = Form::new()
            .text("name", name.to_owned())
            .text("animal_type", animal_type.to_owned())
            .text("age", age.to_owned())
            .part("pet_photo", photo_part(photo_path).await?);
        let req = self
            .client
            .post(self.endpoint("api/pets")?)
            .header("auth_key", header_value(auth_key)?)
            .multipart(form);
        self.execute("add_new_pet", req).await
    }

    /// Create a pet without a photo.
    pub async fn create_pet_simple(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let req = self
            .client
            .post(self.endpoint("api/create_pet_simple")?)
            .header("auth_key", header_value(auth_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.execute("create_pet_simple", req).await
    }

    /// Replace name, type and age of an existing pet.
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let req = self
            .client
            .put(self.endpoint(&format!("api/pets/{pet_id}"))?)
            .header("auth_key", header_value(auth_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.execute("update_pet_info", req).await
    }

    pub async fn delete_pet(&self, auth_key: &str, pet_id: &str) -> Result<ApiResponse> {
        let req = self
            .client
            .delete(self.endpoint(&format!("api/pets/{pet_id}"))?)
            .header("auth_key", header_value(auth_key)?);
        self.execute("delete_pet", req).await
    }

    /// Attach a photo to an existing pet record.
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        let form = Form::new().part("pet_photo", photo_part(photo_path).await?);
        let req = self
            .client
            .post(self.endpoint(&format!("api/pets/set_photo/{pet_id}"))?)
            .header("auth_key", header_value(auth_key)?)
            .multipart(form);
        self.execute("add_photo_of_pet", req).await
    }

    // -------------------- Private helpers ------------------------------------

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn execute(&self, op: &'static str, req: RequestBuilder) -> Result<ApiResponse> {
        let span = debug_span!("api.request", op = op, base = %self.base_url);
        let _g = span.enter();
        let started = Instant::now();

        let resp = req.send().await?;
        let out = ApiResponse::read(resp).await?;

        debug!(
            op = op,
            status = %out.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "http response received"
        );
        Ok(out)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    Ok(HeaderValue::from_str(value)?)
}

async fn photo_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo")
        .to_owned();
    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for_path(path))?)
}

fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
