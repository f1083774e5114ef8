//! Domain and application layers of `svcgen`.
//!
//! Generating a service is three steps, all driven by
//! [`application::GenerateService`]:
//!
//! 1. [`domain::ServiceName::parse`] rejects malformed names before any I/O.
//! 2. [`domain::FilePlan::build`] resolves template, output directory, file
//!    name and template data for one kind.
//! 3. `GenerateService::materialize` creates the directory, renders the
//!    template and writes the file through the ports in
//!    [`application::ports`].
//!
//! Concrete ports live in `svcgen-adapters`; this crate does no I/O itself.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::application::GenerateService;
//!
//! // Adapters come from svcgen-adapters (or test doubles).
//! let service = GenerateService::new(templates, renderer, filesystem)
//!     .with_output_root(".");
//!
//! // Writes api/billing.yml and cmd/billing/main.go
//! let generated = service.generate("billing", &["api", "main"])?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Everything a caller needs to drive a generation.
pub mod prelude {
    pub use crate::application::{
        GenerateService, Generated, GeneratedFile,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{FileKind, FilePlan, ServiceName, TemplateData, TemplateRef};
    pub use crate::error::{SvcgenError, SvcgenResult};
}
