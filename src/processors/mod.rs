// pixconv/src/processors/mod.rs
mod encoder;
mod loader;
mod walker;

pub use encoder::{prepare_for, Encoder};
pub use loader::Loader;
pub use walker::Walker;

pub mod prelude {
    pub use super::{Encoder, Loader, Walker};
}
