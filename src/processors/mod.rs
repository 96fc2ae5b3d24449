// imgfit/src/processors/mod.rs
mod loader;
mod saver;
mod scaler;

pub use loader::Loader;
pub use saver::Saver;
pub use scaler::Scaler;
