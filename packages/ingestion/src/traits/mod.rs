//! Trait seams for the pipeline's external collaborators.

pub mod fetcher;
pub mod model;
pub mod store;

pub use fetcher::PageFetcher;
pub use model::TextModel;
pub use store::LinkStore;
