pub mod customer_service;
pub mod dto;
pub mod email_service;
pub mod phone_service;
pub mod resolution;
