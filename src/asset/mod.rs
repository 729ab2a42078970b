//! On-demand asset compilation.
//!
//! ```text
//! AssetPipeline::fetch("app.js")
//!   └─ CompilerChain::dispatch
//!        ├─ passthrough  stylesheets/*.css
//!        ├─ passthrough  javascripts/*.js      ← javascripts/app.js?
//!        ├─ stylus       stylesheets/*.styl -> .css
//!        ├─ coffee       javascripts/*.coffee -> .js   ← javascripts/app.coffee?
//!        ├─ es6          javascripts/*.es6 -> .js
//!        └─ Unhandable
//! ```

mod chain;
mod error;
mod kind;
pub mod path;
mod pipeline;
mod strategy;

pub use chain::CompilerChain;
pub use error::AssetError;
pub use kind::AssetKind;
pub use pipeline::AssetPipeline;
pub use strategy::{PassthroughAsset, Strategy, TranspilingAsset};
