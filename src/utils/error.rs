// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not open document: {0}")]
    Open(String), // lopdf load failure (missing, corrupt, encrypted)

    #[error("Document has no extractable pages")]
    Empty,
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 401 Unauthorized, 500 Internal Server Error

    #[error("Completion API rate limit exceeded")]
    RateLimited,

    #[error("Completion returned no candidate text")]
    EmptyCompletion, // call succeeded but there is nothing to parse

    #[error("Failed to parse completion response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document rendering failed: {0}")]
    Document(#[from] DocumentError), // Fatal: no record can be produced

    #[error("Enrichment failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
