//! tfcopen -- jump from a project directory to its Terraform Cloud page.
//!
//! The library half hosts marker file discovery ([`config`]), organization
//! resolution ([`org`]), URL construction ([`uri`]), and delivery
//! ([`browser`]); the binary wires them to the CLI flags.

pub mod browser;
pub mod config;
pub mod error;
pub mod org;
pub mod uri;
