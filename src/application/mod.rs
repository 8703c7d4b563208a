pub mod commands;
pub mod dto;
pub mod queries;
pub mod services;

mod assembler;
mod deadline;
