// Brand endpoints (full CRUD)

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Brand, BrandInput};

impl ApiClient {
    /// `GET /brands`
    pub async fn list_brands(&self) -> Result<Vec<Brand>, Error> {
        let url = self.endpoint("brands")?;
        debug!("listing brands");
        self.get(url).await
    }

    /// `GET /brands/{id}`
    pub async fn get_brand(&self, id: &str) -> Result<Brand, Error> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        self.get(url).await
    }

    /// `POST /brands` with `{"brandName": "..."}`
    pub async fn create_brand(&self, input: &BrandInput) -> Result<Brand, Error> {
        let url = self.endpoint("brands")?;
        debug!(brand_name = %input.brand_name, "creating brand");
        self.post(url, input).await
    }

    /// `PUT /brands/{id}` with `{"brandName": "..."}`
    pub async fn update_brand(&self, id: &str, input: &BrandInput) -> Result<Brand, Error> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        debug!(id, brand_name = %input.brand_name, "updating brand");
        self.put(url, input).await
    }

    /// `DELETE /brands/{id}`
    pub async fn delete_brand(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&format!("brands/{id}"))?;
        debug!(id, "deleting brand");
        self.delete(url).await
    }
}
