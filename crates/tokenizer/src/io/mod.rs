//! Serialization and deserialization for trained models.
//!
//! Models are stored as a single `tokenizer.json` file inside a model
//! directory.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedModel, MODEL_FILE};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
