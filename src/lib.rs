pub mod adapters;
pub mod common;
pub mod entities;
pub mod events;
pub mod models;
pub mod repositories;
pub mod settings;
pub mod usecases;
