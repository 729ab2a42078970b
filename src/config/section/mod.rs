//! Configuration section definitions.

mod assets;
mod compilers;
mod serve;

pub use assets::AssetsConfig;
pub use compilers::CompilersConfig;
pub use serve::ServeConfig;
