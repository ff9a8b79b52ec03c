// ── Gateway seam ──
//
// Every network call the coordinator and catalog make goes through this
// trait. `ApiClient` is the production implementation; tests script their
// own.

use std::future::Future;

use maison_api::{
    ApiClient, Brand, BrandInput, CommentInput, DashboardStats, Error, Member, MessageResponse,
    Perfume, PerfumeDetail, PerfumePage, PerfumePayload, PerfumeQuery, PerfumeSummary,
};

/// One HTTP call per operation, typed result or error, no retries.
pub trait Gateway: Send + Sync + 'static {
    fn list_members(&self) -> impl Future<Output = Result<Vec<Member>, Error>> + Send;

    fn get_stats(&self) -> impl Future<Output = Result<DashboardStats, Error>> + Send;

    fn list_brands(&self) -> impl Future<Output = Result<Vec<Brand>, Error>> + Send;

    fn create_brand(&self, input: &BrandInput) -> impl Future<Output = Result<Brand, Error>> + Send;

    fn update_brand(
        &self,
        id: &str,
        input: &BrandInput,
    ) -> impl Future<Output = Result<Brand, Error>> + Send;

    fn delete_brand(&self, id: &str) -> impl Future<Output = Result<(), Error>> + Send;

    fn list_perfumes(
        &self,
        query: &PerfumeQuery,
    ) -> impl Future<Output = Result<PerfumePage<Perfume>, Error>> + Send;

    fn get_perfume(&self, id: &str) -> impl Future<Output = Result<PerfumeDetail, Error>> + Send;

    fn create_perfume(
        &self,
        payload: &PerfumePayload,
    ) -> impl Future<Output = Result<Perfume, Error>> + Send;

    fn update_perfume(
        &self,
        id: &str,
        payload: &PerfumePayload,
    ) -> impl Future<Output = Result<Perfume, Error>> + Send;

    fn delete_perfume(&self, id: &str) -> impl Future<Output = Result<(), Error>> + Send;

    fn browse_perfumes(
        &self,
        query: &PerfumeQuery,
    ) -> impl Future<Output = Result<PerfumePage<PerfumeSummary>, Error>> + Send;

    fn add_comment(
        &self,
        perfume_id: &str,
        comment: &CommentInput,
    ) -> impl Future<Output = Result<MessageResponse, Error>> + Send;
}

impl Gateway for ApiClient {
    async fn list_members(&self) -> Result<Vec<Member>, Error> {
        ApiClient::list_members(self).await
    }

    async fn get_stats(&self) -> Result<DashboardStats, Error> {
        ApiClient::get_stats(self).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, Error> {
        ApiClient::list_brands(self).await
    }

    async fn create_brand(&self, input: &BrandInput) -> Result<Brand, Error> {
        ApiClient::create_brand(self, input).await
    }

    async fn update_brand(&self, id: &str, input: &BrandInput) -> Result<Brand, Error> {
        ApiClient::update_brand(self, id, input).await
    }

    async fn delete_brand(&self, id: &str) -> Result<(), Error> {
        ApiClient::delete_brand(self, id).await
    }

    async fn list_perfumes(&self, query: &PerfumeQuery) -> Result<PerfumePage<Perfume>, Error> {
        ApiClient::query_perfumes(self, query).await
    }

    async fn get_perfume(&self, id: &str) -> Result<PerfumeDetail, Error> {
        ApiClient::get_perfume(self, id).await
    }

    async fn create_perfume(&self, payload: &PerfumePayload) -> Result<Perfume, Error> {
        ApiClient::create_perfume(self, payload).await
    }

    async fn update_perfume(&self, id: &str, payload: &PerfumePayload) -> Result<Perfume, Error> {
        ApiClient::update_perfume(self, id, payload).await
    }

    async fn delete_perfume(&self, id: &str) -> Result<(), Error> {
        ApiClient::delete_perfume(self, id).await
    }

    async fn browse_perfumes(
        &self,
        query: &PerfumeQuery,
    ) -> Result<PerfumePage<PerfumeSummary>, Error> {
        ApiClient::browse_perfumes(self, query).await
    }

    async fn add_comment(
        &self,
        perfume_id: &str,
        comment: &CommentInput,
    ) -> Result<MessageResponse, Error> {
        ApiClient::add_comment(self, perfume_id, comment).await
    }
}
