//! Design tokens compiled from `theme.toml`.
//!
//! The build script validates the TOML catalog and embeds it as JSON; [`ThemeTokens`] parses
//! that catalog at runtime, follows `$alias` references inside a scale, and renders the
//! resolved values as `--ui-<scale>-<key>` CSS custom properties.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/theme_tokens_generated.rs"));

/// Theme catalog schema understood by this crate.
pub const THEME_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named token scales that render as CSS custom properties.
pub enum TokenScale {
    /// Color palette and semantic color aliases.
    Colors,
    /// Gap and padding scale.
    Space,
    /// Fixed dimension scale.
    Sizes,
    /// Font family stacks.
    Fonts,
    /// Font size scale.
    FontSizes,
    /// Line height scale.
    LineHeights,
    /// Font weight scale.
    FontWeights,
    /// Border radius scale.
    Radii,
    /// Stacking order scale.
    ZIndices,
}

impl TokenScale {
    /// Every scale in stylesheet emission order.
    pub const ALL: [Self; 9] = [
        Self::Colors,
        Self::Space,
        Self::Sizes,
        Self::Fonts,
        Self::FontSizes,
        Self::LineHeights,
        Self::FontWeights,
        Self::Radii,
        Self::ZIndices,
    ];

    /// Stable scale token used in CSS variable names and error messages.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Space => "space",
            Self::Sizes => "sizes",
            Self::Fonts => "fonts",
            Self::FontSizes => "font-sizes",
            Self::LineHeights => "line-heights",
            Self::FontWeights => "font-weights",
            Self::Radii => "radii",
            Self::ZIndices => "z-indices",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Theme catalog parse and resolution failures.
pub enum ThemeError {
    /// The catalog JSON could not be decoded.
    #[error("theme catalog is malformed: {0}")]
    Malformed(String),
    /// The catalog was produced for a different schema.
    #[error("unsupported theme schema version {found} (expected {THEME_SCHEMA_VERSION})")]
    UnsupportedSchema {
        /// Version found in the catalog.
        found: u32,
    },
    /// A lookup or alias named a token missing from its scale.
    #[error("unknown token `{key}` in {scale} scale")]
    UnknownToken {
        /// Scale token.
        scale: &'static str,
        /// Missing key.
        key: String,
    },
    /// Alias resolution revisited a token.
    #[error("alias cycle through `{key}` in {scale} scale")]
    AliasCycle {
        /// Scale token.
        scale: &'static str,
        /// Key whose resolution looped.
        key: String,
    },
}

type Scale = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Parsed theme token catalog.
pub struct ThemeTokens {
    schema_version: u32,
    colors: Scale,
    space: Scale,
    sizes: Scale,
    fonts: Scale,
    font_sizes: Scale,
    line_heights: Scale,
    font_weights: Scale,
    radii: Scale,
    z_indices: Scale,
    #[serde(default)]
    media: Scale,
}

impl ThemeTokens {
    /// Loads the catalog embedded at build time.
    pub fn bundled() -> Result<Self, ThemeError> {
        Self::from_json(THEME_TOKENS_JSON)
    }

    /// Parses a catalog in the embedded JSON shape.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let tokens: Self =
            serde_json::from_str(raw).map_err(|err| ThemeError::Malformed(err.to_string()))?;
        if tokens.schema_version != THEME_SCHEMA_VERSION {
            return Err(ThemeError::UnsupportedSchema {
                found: tokens.schema_version,
            });
        }
        Ok(tokens)
    }

    /// Raw (unresolved) entries of one scale.
    pub fn scale(&self, scale: TokenScale) -> &BTreeMap<String, String> {
        match scale {
            TokenScale::Colors => &self.colors,
            TokenScale::Space => &self.space,
            TokenScale::Sizes => &self.sizes,
            TokenScale::Fonts => &self.fonts,
            TokenScale::FontSizes => &self.font_sizes,
            TokenScale::LineHeights => &self.line_heights,
            TokenScale::FontWeights => &self.font_weights,
            TokenScale::Radii => &self.radii,
            TokenScale::ZIndices => &self.z_indices,
        }
    }

    /// Resolves `key` in `scale`, following `$alias` values within the same scale.
    pub fn resolve(&self, scale: TokenScale, key: &str) -> Result<&str, ThemeError> {
        resolve_in(self.scale(scale), scale.token(), key)
    }

    /// Media query registered under `name` (for example `bp1`).
    pub fn media(&self, name: &str) -> Result<&str, ThemeError> {
        resolve_in(&self.media, "media", name)
    }

    /// Renders every scale as resolved custom properties on `:root`.
    pub fn css_variables(&self) -> Result<String, ThemeError> {
        let mut css = String::from(":root {\n");
        for scale in TokenScale::ALL {
            for key in self.scale(scale).keys() {
                let value = self.resolve(scale, key)?;
                let _ = writeln!(css, "  {}: {value};", variable_name(scale, key));
            }
        }
        css.push_str("}\n");
        Ok(css)
    }
}

fn resolve_in<'a>(
    tokens: &'a Scale,
    scale: &'static str,
    key: &str,
) -> Result<&'a str, ThemeError> {
    let mut current = key;
    // A chain longer than the scale must revisit a key.
    for _ in 0..=tokens.len() {
        let Some(value) = tokens.get(current) else {
            return Err(ThemeError::UnknownToken {
                scale,
                key: current.to_string(),
            });
        };
        match value.strip_prefix('$') {
            Some(alias) => current = alias,
            None => return Ok(value),
        }
    }
    Err(ThemeError::AliasCycle {
        scale,
        key: key.to_string(),
    })
}

/// Custom property name for a token, e.g. `--ui-space-0_5`.
pub fn variable_name(scale: TokenScale, key: &str) -> String {
    format!("--ui-{}-{key}", scale.token())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog_with_colors(colors: &str) -> String {
        format!(
            r#"{{
                "schema_version": 1,
                "colors": {colors},
                "space": {{}}, "sizes": {{}}, "fonts": {{}}, "font_sizes": {{}},
                "line_heights": {{}}, "font_weights": {{}}, "radii": {{}}, "z_indices": {{}}
            }}"#
        )
    }

    #[test]
    fn bundled_catalog_resolves_semantic_aliases() {
        let tokens = ThemeTokens::bundled().expect("bundled theme");

        assert_eq!(tokens.resolve(TokenScale::Colors, "primary"), Ok("#1c75ef"));
        assert_eq!(
            tokens.resolve(TokenScale::Colors, "destructive"),
            Ok("#fc2a26")
        );
        assert_eq!(tokens.resolve(TokenScale::Radii, "control"), Ok("2px"));
        assert_eq!(tokens.resolve(TokenScale::ZIndices, "dialog"), Ok("9999"));
        assert_eq!(tokens.media("bp1"), Ok("(min-width: 480px)"));
    }

    #[test]
    fn unknown_alias_and_cycles_are_errors() {
        let raw = catalog_with_colors(r#"{ "a": "$b", "b": "$a", "dangling": "$missing" }"#);
        let tokens = ThemeTokens::from_json(&raw).expect("catalog");

        assert_eq!(
            tokens.resolve(TokenScale::Colors, "a"),
            Err(ThemeError::AliasCycle {
                scale: "colors",
                key: "a".to_string(),
            })
        );
        assert_eq!(
            tokens.resolve(TokenScale::Colors, "dangling"),
            Err(ThemeError::UnknownToken {
                scale: "colors",
                key: "missing".to_string(),
            })
        );
        assert!(tokens.css_variables().is_err());
    }

    #[test]
    fn aliases_do_not_cross_scales() {
        let tokens = ThemeTokens::bundled().expect("bundled theme");

        assert!(matches!(
            tokens.resolve(TokenScale::Space, "blue500"),
            Err(ThemeError::UnknownToken { scale: "space", .. })
        ));
    }

    #[test]
    fn schema_version_is_checked() {
        let raw = catalog_with_colors("{}");
        let raw = raw.replace("\"schema_version\": 1", "\"schema_version\": 2");

        assert_eq!(
            ThemeTokens::from_json(&raw),
            Err(ThemeError::UnsupportedSchema { found: 2 })
        );
        assert!(matches!(
            ThemeTokens::from_json("{"),
            Err(ThemeError::Malformed(_))
        ));
    }

    #[test]
    fn css_variables_render_resolved_values() {
        let css = ThemeTokens::bundled()
            .and_then(|tokens| tokens.css_variables())
            .expect("css");

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --ui-colors-primary: #1c75ef;\n"));
        assert!(css.contains("  --ui-space-0_5: 4px;\n"));
        assert!(css.contains("  --ui-radii-control: 2px;\n"));
        assert!(!css.contains('$'));
        assert!(!css.contains("min-width"));
    }
}
