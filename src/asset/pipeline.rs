//! The asset pipeline facade.

use super::{AssetError, AssetKind, CompilerChain, PassthroughAsset, Strategy, TranspilingAsset};
use crate::compiler::{Compilers, Transpiler};
use crate::core::Environment;
use std::path::{Path, PathBuf};

/// Built once per process; `fetch` is safe to call from many threads.
#[derive(Debug, Clone)]
pub struct AssetPipeline {
    env: Environment,
    root: PathBuf,
    chain: CompilerChain,
}

impl AssetPipeline {
    /// Build the pipeline. Registration order decides which strategy wins:
    /// verbatim files shadow compiled sources with the same base name.
    pub fn new(env: Environment, root: impl Into<PathBuf>, compilers: Compilers) -> Self {
        let root = root.into();
        let Compilers {
            stylus,
            coffee,
            es6,
        } = compilers;

        let strategies: Vec<Strategy> = vec![
            PassthroughAsset::new(AssetKind::Stylesheet, &root).into(),
            PassthroughAsset::new(AssetKind::Script, &root).into(),
            TranspilingAsset::new(
                AssetKind::Stylesheet,
                "styl",
                Transpiler::Stylus(stylus),
                env.clone(),
                &root,
            )
            .into(),
            TranspilingAsset::new(
                AssetKind::Script,
                "coffee",
                Transpiler::Coffee(coffee),
                env.clone(),
                &root,
            )
            .into(),
            TranspilingAsset::new(
                AssetKind::Script,
                "es6",
                Transpiler::Es6(es6),
                env.clone(),
                &root,
            )
            .into(),
        ];

        Self {
            env,
            root,
            chain: CompilerChain::new(strategies),
        }
    }

    /// Return the compiled content for a requested filename.
    pub fn fetch(&self, filename: &str) -> Result<String, AssetError> {
        self.chain.dispatch(filename)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Strategies in dispatch order.
    pub fn strategies(&self) -> &[Strategy] {
        self.chain.strategies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{CoffeeCompiler, StylusCompiler, fake_babel, installed_babel};
    use std::fs;
    use std::sync::Arc;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Stand-ins for the external CLIs: stylus echoes its flags before the
    /// source, coffee upper-cases the source, babel rewrites arrows.
    fn fake_compilers() -> Compilers {
        Compilers {
            stylus: StylusCompiler::new(vec![
                "sh".into(),
                "-c".into(),
                r#"printf '%s\n' "$@"; cat"#.into(),
                "stylus".into(),
            ]),
            coffee: CoffeeCompiler::new(vec!["tr".into(), "a-z".into(), "A-Z".into()]),
            es6: fake_babel(),
        }
    }

    fn pipeline(env: Environment, root: &Path) -> AssetPipeline {
        AssetPipeline::new(env, root, fake_compilers())
    }

    #[test]
    fn test_registration_order() {
        let p = AssetPipeline::new(Environment::Production, "/srv", Compilers::default());
        let order: Vec<_> = p
            .strategies()
            .iter()
            .map(|s| (s.name(), s.descriptor().source_ext))
            .collect();
        assert_eq!(
            order,
            [
                ("passthrough", "css"),
                ("passthrough", "js"),
                ("stylus", "styl"),
                ("coffee", "coffee"),
                ("es6", "es6"),
            ]
        );
    }

    #[test]
    fn test_passthrough_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stylesheets/app.css", "body{color:red}");
        let p = pipeline(Environment::Production, dir.path());
        assert_eq!(p.fetch("app.css").unwrap(), "body{color:red}");
    }

    #[test]
    fn test_transpile_selection() {
        let dir = tempfile::tempdir().unwrap();
        let source = "square = (x) -> x * x\n";
        write(dir.path(), "javascripts/app.coffee", source);
        let p = pipeline(Environment::Production, dir.path());

        let out = p.fetch("app.js").unwrap();
        assert!(!out.is_empty());
        assert_ne!(out, source);
        assert_eq!(out, "SQUARE = (X) -> X * X\n");
    }

    #[test]
    fn test_es6_selection() {
        let dir = tempfile::tempdir().unwrap();
        let source = "const greet = (name) => name;\n";
        write(dir.path(), "javascripts/widget.es6", source);
        let p = pipeline(Environment::Production, dir.path());

        let out = p.fetch("widget.js").unwrap();
        assert_ne!(out, source);
        assert!(!out.contains("=>"));
        assert!(out.contains("var greet = function (name) { return name; }"));
    }

    #[test]
    fn test_es6_lowered_by_babel() {
        let Some(es6) = installed_babel() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let source = "export const greet = (name) => `hi ${name}`;\n";
        write(dir.path(), "javascripts/widget.es6", source);
        let compilers = Compilers {
            es6,
            ..Compilers::default()
        };
        let p = AssetPipeline::new(Environment::Production, dir.path(), compilers);

        let out = p.fetch("widget.js").unwrap();
        assert!(out.contains("greet"));
        assert!(!out.contains("=>"));
        assert!(!out.contains('`'));
        assert!(!out.contains("const greet"));
        assert!(out.contains("function"));
    }

    #[test]
    fn test_dispatch_priority() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stylesheets/app.css", "body{color:red}");
        write(dir.path(), "stylesheets/app.styl", "body\n  color blue\n");
        let p = pipeline(Environment::Development, dir.path());
        assert_eq!(p.fetch("app.css").unwrap(), "body{color:red}");
    }

    #[test]
    fn test_js_shadows_coffee_and_es6() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "javascripts/app.js", "raw();");
        write(dir.path(), "javascripts/app.coffee", "coffee()");
        write(dir.path(), "javascripts/app.es6", "es6();");
        let p = pipeline(Environment::Production, dir.path());
        assert_eq!(p.fetch("app.js").unwrap(), "raw();");
    }

    #[test]
    fn test_coffee_before_es6() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "javascripts/app.coffee", "coffee()");
        write(dir.path(), "javascripts/app.es6", "es6();");
        let p = pipeline(Environment::Production, dir.path());
        assert_eq!(p.fetch("app.js").unwrap(), "COFFEE()");
    }

    #[test]
    fn test_unhandled_extension() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "images/logo.png", "png");
        let p = pipeline(Environment::Production, dir.path());
        assert!(p.fetch("logo.png").unwrap_err().is_unhandable());
    }

    #[test]
    fn test_unhandled_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let p = pipeline(Environment::Production, dir.path());
        assert!(p.fetch("missing.js").unwrap_err().is_unhandable());
        assert!(p.fetch("missing.css").unwrap_err().is_unhandable());
    }

    #[test]
    fn test_source_extension_is_not_served() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "javascripts/app.coffee", "x = 1");
        let p = pipeline(Environment::Production, dir.path());
        assert!(p.fetch("app.coffee").unwrap_err().is_unhandable());
    }

    #[test]
    fn test_environment_sensitive_compilation() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stylesheets/app.styl", "body\n  color red\n");

        for env in [Environment::Development, Environment::Test] {
            let out = pipeline(env, dir.path()).fetch("app.css").unwrap();
            assert!(!out.lines().any(|l| l == "--compress"));
            assert!(out.contains("body\n  color red\n"));
        }

        for env in [
            Environment::Production,
            Environment::Other("staging".into()),
            Environment::Other(String::new()),
        ] {
            let out = pipeline(env, dir.path()).fetch("app.css").unwrap();
            assert!(out.lines().any(|l| l == "--compress"));
        }
    }

    #[test]
    fn test_extension_substitution() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "javascripts/foo.bar.coffee", "dotted");
        let p = pipeline(Environment::Production, dir.path());
        assert_eq!(p.fetch("foo.bar.js").unwrap(), "DOTTED");
    }

    #[test]
    fn test_concurrent_fetches() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssetPipeline>();

        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "stylesheets/app.css", "body{}");
        write(dir.path(), "javascripts/app.coffee", "x = 1");
        let p = Arc::new(pipeline(Environment::Production, dir.path()));

        std::thread::scope(|s| {
            for _ in 0..4 {
                let p = Arc::clone(&p);
                s.spawn(move || {
                    assert_eq!(p.fetch("app.css").unwrap(), "body{}");
                    assert_eq!(p.fetch("app.js").unwrap(), "X = 1");
                });
            }
        });
    }

    #[test]
    fn test_real_coffee_pipeline() {
        if which::which("coffee").is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "javascripts/app.coffee", "square = (x) -> x * x\n");
        let p = AssetPipeline::new(Environment::Production, dir.path(), Compilers::default());
        let out = p.fetch("app.js").unwrap();
        assert!(out.contains("function"));
        assert!(!out.contains("->"));
    }
}
