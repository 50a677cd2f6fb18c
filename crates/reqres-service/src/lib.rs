//! # reqres-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    HealthService, RoleService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
