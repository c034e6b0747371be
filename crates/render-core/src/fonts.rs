//! Process-wide font registry.
//!
//! Theme font names are resolved against a single [`FontRegistry`] that is
//! initialised once, before the first render, and never mutated afterwards.
//! Callers may [`install`] a custom registry at startup; otherwise the first
//! call to [`global`] installs [`FontRegistry::standard`].

use crate::error::RenderError;
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// The fourteen Type1 fonts every PDF viewer provides without embedding.
pub const STANDARD_FONTS: [&str; 14] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Symbol",
    "ZapfDingbats",
];

static GLOBAL_FONTS: OnceCell<FontRegistry> = OnceCell::new();

/// A font the renderer can reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFace {
    pub postscript_name: String,
}

/// Name-to-face lookup. Names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    faces: HashMap<String, FontFace>,
}

impl FontRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding the standard Type1 fonts.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for name in STANDARD_FONTS {
            registry.faces.insert(
                name.to_lowercase(),
                FontFace {
                    postscript_name: name.to_string(),
                },
            );
        }
        registry
    }

    /// Makes `alias` resolve to the same face as `target`.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Result<Self, RenderError> {
        let face = self.resolve(target)?.clone();
        self.faces.insert(alias.to_lowercase(), face);
        Ok(self)
    }

    pub fn resolve(&self, name: &str) -> Result<&FontFace, RenderError> {
        self.faces
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| RenderError::UnresolvedFont(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Installs `registry` as the process-wide registry.
///
/// Fails with [`RenderError::FontRegistryInstalled`] if a registry is already
/// in place, including one installed implicitly by [`global`].
pub fn install(registry: FontRegistry) -> Result<&'static FontRegistry, RenderError> {
    let count = registry.len();
    GLOBAL_FONTS
        .set(registry)
        .map_err(|_| RenderError::FontRegistryInstalled)?;
    debug!("Installed process-wide font registry with {} faces", count);
    GLOBAL_FONTS.get().ok_or(RenderError::FontRegistryInstalled)
}

/// The process-wide registry, initialised to the standard fonts on first use.
pub fn global() -> &'static FontRegistry {
    GLOBAL_FONTS.get_or_init(|| {
        debug!("Initialising process-wide font registry with the standard fonts");
        FontRegistry::standard()
    })
}
