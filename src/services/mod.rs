// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod entity_service;

pub use entity_service::EntityService;
