use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

type Scale = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
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
    media: Scale,
}

impl ThemeFile {
    fn scales(&self) -> [(&'static str, &Scale); 10] {
        [
            ("colors", &self.colors),
            ("space", &self.space),
            ("sizes", &self.sizes),
            ("fonts", &self.fonts),
            ("font_sizes", &self.font_sizes),
            ("line_heights", &self.line_heights),
            ("font_weights", &self.font_weights),
            ("radii", &self.radii),
            ("z_indices", &self.z_indices),
            ("media", &self.media),
        ]
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("theme.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let theme: ThemeFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if theme.schema_version != 1 {
        panic!(
            "theme schema mismatch in {}: expected 1 found {}",
            path.display(),
            theme.schema_version
        );
    }
    for (scale, tokens) in theme.scales() {
        for (key, value) in tokens {
            if let Some(alias) = value.strip_prefix('$') {
                if !tokens.contains_key(alias) {
                    panic!(
                        "theme token {scale}.{key} aliases unknown token `{alias}` in {}",
                        path.display()
                    );
                }
            }
        }
    }

    let json = serde_json::to_string_pretty(&theme).expect("serialize theme token catalog");
    let generated = format!(
        "/// Build-time generated theme token catalog JSON.\n\
pub const THEME_TOKENS_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("theme_tokens_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
