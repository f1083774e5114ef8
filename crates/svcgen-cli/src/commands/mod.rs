//! Command handlers. svcgen has a single command; it lives here so `main`
//! stays limited to startup and error reporting.

pub mod generate;
