//! Presentation Layer
//!
//! Multipart handler, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ComplaintAppState;
pub use router::{complaints_router, complaints_router_generic};
