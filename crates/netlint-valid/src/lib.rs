//! Referential-integrity validation for Gateway Load Balancer deployments.
//!
//! Walks the loosely-coupled configuration documents (network, accounts,
//! customizations) and verifies that every cross-document reference resolves
//! and every structural constraint holds. Findings are accumulated as
//! human-readable strings; validation never stops at the first defect.

pub mod rules;
pub mod validator;
