//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate the stub files for a service".

pub mod generate_service;

pub use generate_service::{GenerateService, Generated, GeneratedFile};
