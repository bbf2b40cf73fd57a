//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and existence checks
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Validation always runs before any persistence call, so a rejected request
//! never leaves a partial write behind.

pub mod hero;
pub mod hero_power;
pub mod power;
