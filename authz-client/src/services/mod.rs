//! Authorization service operations implemented over `HttpAuthzClient`

pub mod relationships;
pub mod schema_manager;
