//! Concert seat-reservation backend.
//!
//! The domain layer owns the admission rules (capacity, one active claim per
//! user per concert, owner-only cancellation); inbound adapters expose them
//! over HTTP and outbound adapters keep state in process-local memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Trace middleware attaching request-scoped identifiers.
pub use middleware::Trace;
