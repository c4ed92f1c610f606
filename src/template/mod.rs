//! Drop-in replaceable template engines.
//!
//! Core code and plugins obtain their template engine through a
//! [`TemplateFactory`] instead of constructing one directly. A site may
//! register an override constructor at initialization to substitute its
//! own engine; otherwise the factory hands out the built-in
//! [`SimpleTemplate`], a plain `{placeholder}` substitution engine.
//!
//! # Examples
//!
//! ```
//! use renderkit::template::{TemplateFactory, TemplateRoot, TemplateOptions};
//!
//! let factory = TemplateFactory::new();
//! let mut template = factory.new_template(
//!     TemplateRoot::Core("themes/default".into()),
//!     TemplateOptions::default(),
//! );
//! template.set_var("site_name", "Example");
//! assert_eq!(template.render("Welcome to {site_name}!"), "Welcome to Example!");
//! ```

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{RenderError, Result};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap());

/// How to treat placeholders that no variable was set for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownsPolicy {
    /// Remove unknown placeholders from the output
    #[default]
    Remove,
    /// Leave unknown placeholders in place
    Keep,
}

impl From<&str> for UnknownsPolicy {
    fn from(value: &str) -> Self {
        match value {
            "keep" => Self::Keep,
            _ => Self::Remove,
        }
    }
}

/// Where template files are looked up.
///
/// Core code passes a single root; plugins may support multiple template
/// locations searched in order.
#[derive(Debug, Clone)]
pub enum TemplateRoot {
    /// A single core template directory
    Core(PathBuf),
    /// Plugin template directories, searched in order
    Plugin(Vec<PathBuf>),
}

impl TemplateRoot {
    fn directories(&self) -> Vec<&PathBuf> {
        match self {
            TemplateRoot::Core(root) => vec![root],
            TemplateRoot::Plugin(roots) => roots.iter().collect(),
        }
    }
}

/// Options passed through to the constructed engine.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub unknowns: UnknownsPolicy,
}

impl From<&str> for TemplateOptions {
    /// A bare string option is the unknowns policy.
    fn from(value: &str) -> Self {
        TemplateOptions {
            unknowns: UnknownsPolicy::from(value),
        }
    }
}

/// A template engine as handed out by [`TemplateFactory`].
pub trait TemplateEngine {
    /// Sets a substitution variable.
    fn set_var(&mut self, name: &str, value: &str);

    /// Substitutes `{name}` placeholders in the given template text.
    fn render(&self, template: &str) -> String;
}

/// The built-in engine: `{placeholder}` substitution over template files.
pub struct SimpleTemplate {
    root: TemplateRoot,
    unknowns: UnknownsPolicy,
    vars: IndexMap<String, String>,
}

impl SimpleTemplate {
    pub fn new(root: TemplateRoot, options: TemplateOptions) -> Self {
        SimpleTemplate {
            root,
            unknowns: options.unknowns,
            vars: IndexMap::new(),
        }
    }

    /// Loads a template file from the first root directory that has it.
    ///
    /// # Errors
    ///
    /// Returns a `TemplateError` when no root contains the file, or an
    /// `Io` error when reading fails.
    pub fn load(&self, name: &str) -> Result<String> {
        for dir in self.root.directories() {
            let path = dir.join(name);
            if path.exists() {
                return Ok(fs::read_to_string(path)?);
            }
        }
        Err(RenderError::template_error(format!(
            "Template {} not found in any root",
            name
        )))
    }
}

impl TemplateEngine for SimpleTemplate {
    fn set_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                match self.vars.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => match self.unknowns {
                        UnknownsPolicy::Remove => String::new(),
                        UnknownsPolicy::Keep => caps[0].to_string(),
                    },
                }
            })
            .into_owned()
    }
}

/// Constructor signature for override engines.
pub type EngineConstructor =
    dyn Fn(&TemplateRoot, &TemplateOptions) -> Box<dyn TemplateEngine> + Send + Sync;

/// Hands out template engines, honoring a registered override.
#[derive(Default)]
pub struct TemplateFactory {
    override_constructor: Option<Box<EngineConstructor>>,
}

impl TemplateFactory {
    /// A factory that always constructs the built-in engine.
    pub fn new() -> Self {
        TemplateFactory {
            override_constructor: None,
        }
    }

    /// Registers an override constructor consulted before the built-in
    /// engine. Replaces any previously registered override.
    pub fn register_override(&mut self, constructor: Box<EngineConstructor>) {
        self.override_constructor = Some(constructor);
    }

    /// Constructs a template engine for the given root and options.
    pub fn new_template(
        &self,
        root: TemplateRoot,
        options: TemplateOptions,
    ) -> Box<dyn TemplateEngine> {
        if let Some(constructor) = &self.override_constructor {
            return constructor(&root, &options);
        }
        Box::new(SimpleTemplate::new(root, options))
    }
}
