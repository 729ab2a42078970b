//! Asset kind definitions.

/// Category of served asset; decides the type directory and native extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `stylesheets/*.css`
    Stylesheet,
    /// `javascripts/*.js`
    Script,
}

impl AssetKind {
    /// Subdirectory under the asset root.
    pub const fn type_dir(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheets",
            Self::Script => "javascripts",
        }
    }

    /// Extension clients request and passthrough serves verbatim.
    pub const fn native_ext(self) -> &'static str {
        match self {
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }
}
