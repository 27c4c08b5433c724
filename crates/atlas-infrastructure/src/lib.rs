//! Atlas infrastructure.
//!
//! Concrete adapters behind the `atlas-core` ports: file-backed snapshot
//! repositories for the identity and mood history, path resolution, atomic
//! JSON storage, secret loading, and the Gemini-backed analyzer.

pub mod gemini;
pub mod identity_repository;
pub mod mood_repository;
pub mod paths;
pub mod secret;
pub mod storage;

pub use gemini::GeminiAnalyzer;
pub use identity_repository::FileIdentityRepository;
pub use mood_repository::FileMoodRepository;
pub use paths::AtlasPaths;
pub use secret::load_secret_config;
