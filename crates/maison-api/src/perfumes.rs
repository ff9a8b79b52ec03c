// Perfume endpoints
//
// The same `GET /perfumes` route serves the storefront (summary
// projection, optional search/brand filter) and the admin table (full
// projection). Both are paginated server-side.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    CommentInput, MessageResponse, Perfume, PerfumeDetail, PerfumePage, PerfumePayload,
    PerfumeQuery, PerfumeSummary,
};

impl ApiClient {
    /// Admin listing of one page.
    ///
    /// `GET /perfumes?page={page}&limit={limit}`
    pub async fn list_perfumes(&self, page: u32, limit: u32) -> Result<PerfumePage<Perfume>, Error> {
        self.query_perfumes(&PerfumeQuery::page(page, limit)).await
    }

    /// Admin listing with the full query (search and brand filter).
    pub async fn query_perfumes(&self, query: &PerfumeQuery) -> Result<PerfumePage<Perfume>, Error> {
        let url = self.perfumes_url(query)?;
        debug!(?query, "listing perfumes");
        self.get(url).await
    }

    /// Storefront listing.
    ///
    /// `GET /perfumes?page&limit&search&brandName`
    pub async fn browse_perfumes(
        &self,
        query: &PerfumeQuery,
    ) -> Result<PerfumePage<PerfumeSummary>, Error> {
        let url = self.perfumes_url(query)?;
        debug!(?query, "browsing catalog");
        self.get(url).await
    }

    /// `GET /perfumes/{id}` (includes reviews)
    pub async fn get_perfume(&self, id: &str) -> Result<PerfumeDetail, Error> {
        let url = self.endpoint(&format!("perfumes/{id}"))?;
        self.get(url).await
    }

    /// `POST /perfumes`
    pub async fn create_perfume(&self, payload: &PerfumePayload) -> Result<Perfume, Error> {
        let url = self.endpoint("perfumes")?;
        debug!(perfume_name = %payload.perfume_name, "creating perfume");
        self.post(url, payload).await
    }

    /// `PUT /perfumes/{id}`
    pub async fn update_perfume(&self, id: &str, payload: &PerfumePayload) -> Result<Perfume, Error> {
        let url = self.endpoint(&format!("perfumes/{id}"))?;
        debug!(id, "updating perfume");
        self.put(url, payload).await
    }

    /// `DELETE /perfumes/{id}`
    pub async fn delete_perfume(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&format!("perfumes/{id}"))?;
        debug!(id, "deleting perfume");
        self.delete(url).await
    }

    /// Post a review.
    ///
    /// `POST /perfumes/{id}/comments` with `{"rating": N, "content": "..."}`
    pub async fn add_comment(
        &self,
        perfume_id: &str,
        comment: &CommentInput,
    ) -> Result<MessageResponse, Error> {
        let url = self.endpoint(&format!("perfumes/{perfume_id}/comments"))?;
        debug!(perfume_id, rating = comment.rating, "adding review");
        self.post(url, comment).await
    }

    fn perfumes_url(&self, query: &PerfumeQuery) -> Result<url::Url, Error> {
        let mut url = self.endpoint("perfumes")?;
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        Ok(url)
    }
}
