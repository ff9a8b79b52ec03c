// Scripted in-memory gateway for coordinator, view, and catalog tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use tokio::sync::Semaphore;

use maison_api::{
    Brand, BrandInput, CommentInput, DashboardStats, Error, Member, MessageResponse,
    PaginationInfo, Perfume, PerfumeDetail, PerfumePage, PerfumePayload, PerfumeQuery,
    PerfumeSummary,
};

use crate::gateway::Gateway;

/// Records every call, serves canned data, and can fail or block any
/// operation on demand.
#[derive(Default)]
pub(crate) struct FakeGateway {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    gates: Mutex<HashMap<&'static str, Arc<Semaphore>>>,
    brands: Mutex<Vec<Brand>>,
    pub(crate) total_pages: u32,
}

impl FakeGateway {
    pub(crate) fn new() -> Self {
        let fake = Self {
            total_pages: 3,
            ..Self::default()
        };
        *fake.brands.lock().unwrap() = vec![brand("b1", "Creed"), brand("b2", "Diptyque")];
        fake
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls whose label starts with `prefix`.
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub(crate) fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub(crate) fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    /// Block `op` until permits are added to the returned semaphore.
    pub(crate) fn gate(&self, op: &'static str) -> Arc<Semaphore> {
        let sem = Arc::new(Semaphore::new(0));
        self.gates.lock().unwrap().insert(op, Arc::clone(&sem));
        sem
    }

    async fn enter(&self, op: &'static str, label: String) -> Result<(), Error> {
        self.calls.lock().unwrap().push(label);
        let gate = self.gates.lock().unwrap().get(op).cloned();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.failing.lock().unwrap().contains(op) {
            return Err(Error::Api {
                status: 500,
                message: format!("{op} failed"),
            });
        }
        Ok(())
    }

    fn page<T>(&self, query: &PerfumeQuery, make: impl Fn(String) -> T) -> PerfumePage<T> {
        let id = format!("p{}{}", query.page, query.search.as_deref().unwrap_or(""));
        PerfumePage {
            perfumes: vec![make(id)],
            pagination: PaginationInfo {
                current_page: query.page,
                total_pages: self.total_pages,
                total_count: u64::from(self.total_pages) * u64::from(query.limit),
                limit: query.limit,
                has_next_page: query.page < self.total_pages,
                has_prev_page: query.page > 1,
            },
        }
    }
}

pub(crate) fn brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.into(),
        brand_name: name.into(),
    }
}

pub(crate) fn perfume(id: &str) -> Perfume {
    Perfume {
        id: id.into(),
        perfume_name: format!("Perfume {id}"),
        image_uri: String::new(),
        target_audience: "unisex".into(),
        brand_name: "Creed".into(),
        concentration: Some("EDP".into()),
        price: Some(100.0),
        volume: Some(50),
        description: Some("A test fragrance".into()),
        ingredients: Some("musk".into()),
        brand: None,
    }
}

fn query_label(op: &str, query: &PerfumeQuery) -> String {
    format!(
        "{op}({},{},{},{})",
        query.page,
        query.limit,
        query.search.as_deref().unwrap_or(""),
        query.brand_name.as_deref().unwrap_or("")
    )
}

impl Gateway for FakeGateway {
    async fn list_members(&self) -> Result<Vec<Member>, Error> {
        self.enter("list_members", "list_members".into()).await?;
        Ok(vec![Member {
            id: "m1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            year_of_birth: 1990,
            is_male: false,
            is_admin: true,
        }])
    }

    async fn get_stats(&self) -> Result<DashboardStats, Error> {
        self.enter("get_stats", "get_stats".into()).await?;
        Ok(DashboardStats {
            members_count: 1,
            brands_count: u64::try_from(self.brands.lock().unwrap().len()).unwrap(),
            perfumes_count: 30,
            active_clients_count: 1,
        })
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, Error> {
        self.enter("list_brands", "list_brands".into()).await?;
        Ok(self.brands.lock().unwrap().clone())
    }

    async fn create_brand(&self, input: &BrandInput) -> Result<Brand, Error> {
        self.enter("create_brand", format!("create_brand({})", input.brand_name))
            .await?;
        let mut brands = self.brands.lock().unwrap();
        // Server-side normalization the client cannot predict.
        let created = brand(&format!("b{}", brands.len() + 1), &input.brand_name.to_uppercase());
        brands.insert(0, created.clone());
        Ok(created)
    }

    async fn update_brand(&self, id: &str, input: &BrandInput) -> Result<Brand, Error> {
        self.enter("update_brand", format!("update_brand({id},{})", input.brand_name))
            .await?;
        let mut brands = self.brands.lock().unwrap();
        let updated = brand(id, &input.brand_name);
        if let Some(existing) = brands.iter_mut().find(|b| b.id == id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    async fn delete_brand(&self, id: &str) -> Result<(), Error> {
        self.enter("delete_brand", format!("delete_brand({id})")).await?;
        self.brands.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn list_perfumes(&self, query: &PerfumeQuery) -> Result<PerfumePage<Perfume>, Error> {
        self.enter("list_perfumes", query_label("list_perfumes", query))
            .await?;
        Ok(self.page(query, |id| perfume(&id)))
    }

    async fn get_perfume(&self, id: &str) -> Result<PerfumeDetail, Error> {
        self.enter("get_perfume", format!("get_perfume({id})")).await?;
        Ok(PerfumeDetail {
            perfume: perfume(id),
            comments: Vec::new(),
        })
    }

    async fn create_perfume(&self, payload: &PerfumePayload) -> Result<Perfume, Error> {
        self.enter("create_perfume", format!("create_perfume({})", payload.perfume_name))
            .await?;
        Ok(perfume("new"))
    }

    async fn update_perfume(&self, id: &str, _payload: &PerfumePayload) -> Result<Perfume, Error> {
        self.enter("update_perfume", format!("update_perfume({id})"))
            .await?;
        Ok(perfume(id))
    }

    async fn delete_perfume(&self, id: &str) -> Result<(), Error> {
        self.enter("delete_perfume", format!("delete_perfume({id})"))
            .await?;
        Ok(())
    }

    async fn browse_perfumes(
        &self,
        query: &PerfumeQuery,
    ) -> Result<PerfumePage<PerfumeSummary>, Error> {
        self.enter("browse_perfumes", query_label("browse_perfumes", query))
            .await?;
        Ok(self.page(query, |id| PerfumeSummary {
            perfume_name: format!("Perfume {id}"),
            id,
            image_uri: String::new(),
            target_audience: "unisex".into(),
            brand_name: query.brand_name.clone().unwrap_or_else(|| "Creed".into()),
            concentration: None,
            price: None,
        }))
    }

    async fn add_comment(
        &self,
        perfume_id: &str,
        comment: &CommentInput,
    ) -> Result<MessageResponse, Error> {
        self.enter("add_comment", format!("add_comment({perfume_id},{})", comment.rating))
            .await?;
        Ok(MessageResponse {
            message: "Comment added".into(),
        })
    }
}
