//! Lead Email Enrichment Library
//!
//! This library enriches lists of sales leads (person + company records)
//! with plausible business email addresses by calling a remote generation
//! service, then validates, batches, and reconciles results into a single
//! output set covering every input lead exactly once.
//!
//! The entry point is [`enrichment::enrich_leads_workflow`]; the individual
//! stages are public so callers can compose their own pipelines.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `domain`: Company-domain cleaning and validation.
//! - `enrichment`: Batched enrichment pipeline.
//! - `errors`: Error handling types.
//! - `generator_client`: Email generation service client.
//! - `models`: Core data models.
//! - `obs`: Observability and logging.
//! - `reconcile`: Result reconciliation and summary statistics.
//! - `validator`: Lead validation and cleaning.
//! - `verification`: Post-hoc email verification.

pub mod config;
pub mod domain;
pub mod enrichment;
pub mod errors;
pub mod generator_client;
pub mod models;
pub mod obs;
pub mod reconcile;
pub mod validator;
pub mod verification;
