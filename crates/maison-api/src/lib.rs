// maison-api: Async Rust client for the Maison fragrance catalog REST API

pub mod auth;
pub mod brands;
pub mod client;
pub mod error;
pub mod members;
pub mod models;
pub mod perfumes;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use models::{
    AuthResponse, AuthUser, Brand, BrandInput, BrandRef, Comment, CommentAuthor, CommentInput,
    Concentration, DashboardStats, Member, MemberProfile, MessageResponse, PaginationInfo,
    PasswordChange, Perfume, PerfumeDetail, PerfumePage, PerfumePayload, PerfumeQuery,
    PerfumeSummary, ProfileUpdate, RegisterRequest, TargetAudience,
};
pub use transport::{TlsMode, TransportConfig};
