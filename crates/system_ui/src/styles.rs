//! Global stylesheet: theme custom properties, reset, and component rules keyed on the
//! `data-ui-*` DOM contract.

use std::fmt::Write as _;

use leptos::*;

use crate::theme::{ThemeError, ThemeTokens};

const GLOBAL_RESET: &str = r#"
*, *::before, *::after {
  box-sizing: border-box;
  font-family: var(--ui-fonts-sans);
}
* {
  margin: 0;
}
"#;

const COMPONENT_CSS: &str = r#"
.ui-button {
  padding: var(--ui-space-1);
  border: 1px solid transparent;
  border-radius: var(--ui-radii-control);
  background-color: var(--ui-colors-white);
  font-size: var(--ui-font-sizes-2);
  line-height: var(--ui-line-heights-1);
  font-weight: var(--ui-font-weights-medium);
  text-decoration: none;
  cursor: pointer;
}
.ui-button:focus,
.ui-icon-text-button:focus {
  outline: 2px dotted var(--ui-colors-black);
  outline-offset: 1px;
}
.ui-button:active,
.ui-icon-text-button:active,
.ui-dialog-close-button:active {
  transform: translateY(1px);
}
.ui-button[data-ui-variant="default"] {
  border-color: var(--ui-colors-grey400);
  color: var(--ui-colors-primary);
}
.ui-button[data-ui-variant="default"]:hover,
.ui-button[data-ui-variant="default"]:active {
  border-color: var(--ui-colors-black);
  color: var(--ui-colors-black);
}
.ui-button[data-ui-variant="primary"] {
  border-color: var(--ui-colors-primary);
  background-color: var(--ui-colors-primary);
  color: var(--ui-colors-white);
}
.ui-button[data-ui-variant="destructive"] {
  border-color: var(--ui-colors-destructive);
  background-color: var(--ui-colors-destructive);
  color: var(--ui-colors-white);
}
.ui-button[data-ui-variant="primary"]:hover,
.ui-button[data-ui-variant="primary"]:active,
.ui-button[data-ui-variant="destructive"]:hover,
.ui-button[data-ui-variant="destructive"]:active {
  border-color: var(--ui-colors-black);
  background-color: var(--ui-colors-black);
}

.ui-icon-text-button {
  display: inline-flex;
  align-items: center;
  gap: var(--ui-space-0_5);
  padding: 0;
  border: 0;
  border-radius: 0;
  background-color: transparent;
  font-size: var(--ui-font-sizes-1);
  line-height: var(--ui-line-heights-1);
  text-decoration: none;
  color: var(--ui-colors-primary);
  cursor: pointer;
}
.ui-icon-text-button:hover,
.ui-icon-text-button:active {
  color: var(--ui-colors-black);
}

.ui-input-text {
  display: block;
  width: 100%;
  padding: var(--ui-space-1) var(--ui-space-2);
  border: 1px solid var(--ui-colors-grey400);
  border-radius: var(--ui-radii-control);
  background-color: var(--ui-colors-white);
  font-size: var(--ui-font-sizes-2);
}
.ui-input-text:focus {
  outline: none;
  border-color: var(--ui-colors-black);
}
.ui-input-text[data-ui-resize="vertical"] {
  resize: vertical;
}

.ui-label {
  display: block;
  font-size: var(--ui-font-sizes-1);
  line-height: var(--ui-line-heights-2);
  font-weight: var(--ui-font-weights-regular);
  color: var(--ui-colors-grey500);
}
.ui-form-control > * + *,
.ui-form-control .ui-label > * + * {
  margin-top: var(--ui-space-0_5);
}

.ui-heading {
  display: block;
  margin: 0;
  font-size: var(--ui-font-sizes-3);
  line-height: var(--ui-line-heights-2);
  font-weight: var(--ui-font-weights-medium);
  color: var(--ui-colors-grey500);
}

.ui-stack {
  display: grid;
}
.ui-cluster {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
}
.ui-cluster[data-ui-justify="start"] { justify-content: flex-start; }
.ui-cluster[data-ui-justify="between"] { justify-content: space-between; }
.ui-cluster[data-ui-justify="end"] { justify-content: flex-end; }

.ui-alert {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: var(--ui-space-2);
  font-size: var(--ui-font-sizes-2);
  line-height: var(--ui-line-heights-2);
  font-weight: var(--ui-font-weights-regular);
  background-color: var(--ui-colors-white);
}
.ui-alert-badge {
  display: flex;
  justify-content: center;
  align-items: center;
  width: 20px;
  height: 20px;
  border-radius: 100%;
  color: var(--ui-colors-white);
}
.ui-alert[data-ui-variant="info"] .ui-alert-badge { background-color: var(--ui-colors-info); }
.ui-alert[data-ui-variant="error"] .ui-alert-badge { background-color: var(--ui-colors-destructive); }

.ui-dialog-layer {
  position: fixed;
  inset: 0;
  z-index: var(--ui-z-indices-dialog);
  display: flex;
  justify-content: center;
  align-items: center;
  padding: var(--ui-space-1);
}
.ui-dialog-overlay {
  position: absolute;
  inset: 0;
  background: var(--ui-colors-black);
  opacity: 0.48;
}
.ui-dialog {
  position: relative;
  display: grid;
  grid-template-areas: "header" "content" "footer";
  grid-template-rows: auto 1fr auto;
  flex: 0 1 auto;
  max-width: 100%;
  max-height: 100%;
  border-radius: var(--ui-radii-2);
  background-color: var(--ui-colors-white);
  box-shadow:
    0 1px 1px hsl(0deg 0% 0% / 0.075),
    0 2px 2px hsl(0deg 0% 0% / 0.075),
    0 4px 4px hsl(0deg 0% 0% / 0.075),
    0 8px 8px hsl(0deg 0% 0% / 0.075),
    0 16px 16px hsl(0deg 0% 0% / 0.075);
}
.ui-dialog[data-ui-size="regular"] { width: 540px; }
.ui-dialog[data-ui-size="large"] { width: 660px; }
.ui-dialog:focus { outline: none; }
.ui-dialog-header {
  display: grid;
  grid-template-columns: 1fr auto;
  grid-area: header;
  justify-content: space-between;
  padding: var(--ui-space-3);
  border-bottom: 1px solid var(--ui-colors-grey400);
}
.ui-dialog-close-button {
  display: inline-flex;
  justify-content: center;
  align-items: center;
  width: var(--ui-sizes-3);
  height: var(--ui-sizes-3);
  padding: 0;
  border: none;
  border-radius: 0;
  background: none;
  color: var(--ui-colors-grey500);
  cursor: pointer;
}
.ui-dialog-close-button:focus,
.ui-dialog-close-button:active {
  outline: none;
  color: var(--ui-colors-black);
}
.ui-dialog-content {
  display: block;
  grid-area: content;
  padding: var(--ui-space-3);
  overflow: auto;
}
.ui-dialog-footer {
  display: block;
  grid-area: footer;
  padding: var(--ui-space-3);
  border-top: 1px solid var(--ui-colors-grey400);
}
.ui-dialog-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: flex-end;
  gap: var(--ui-space-2);
}

.ui-icon {
  flex: none;
}
"#;

/// Literal copies of the bundled token values, for when the catalog cannot be resolved.
const FALLBACK_VARIABLES: &str = r#":root {
  --ui-colors-black: #000;
  --ui-colors-blue500: #1c75ef;
  --ui-colors-destructive: #fc2a26;
  --ui-colors-grey400: #c7ced4;
  --ui-colors-grey500: #4e5b63;
  --ui-colors-info: #1c75ef;
  --ui-colors-primary: #1c75ef;
  --ui-colors-red500: #fc2a26;
  --ui-colors-white: #fff;
  --ui-space-0_5: 4px;
  --ui-space-1: 8px;
  --ui-space-1_5: 12px;
  --ui-space-2: 16px;
  --ui-space-3: 24px;
  --ui-space-4: 32px;
  --ui-sizes-3: 24px;
  --ui-fonts-sans: -apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif,"Apple Color Emoji","Segoe UI Emoji";
  --ui-font-sizes-1: 12px;
  --ui-font-sizes-2: 16px;
  --ui-font-sizes-3: 20px;
  --ui-line-heights-1: 1;
  --ui-line-heights-2: 1.4;
  --ui-font-weights-medium: 500;
  --ui-font-weights-regular: 400;
  --ui-radii-2: 4px;
  --ui-radii-control: 2px;
  --ui-z-indices-dialog: 9999;
}
"#;

const FALLBACK_BP1: &str = "(min-width: 480px)";

/// Builds the complete stylesheet from `tokens`.
pub fn stylesheet(tokens: &ThemeTokens) -> Result<String, ThemeError> {
    let variables = tokens.css_variables()?;
    let bp1 = tokens.media("bp1")?;
    Ok(assemble(&variables, bp1))
}

fn assemble(variables: &str, bp1: &str) -> String {
    let mut css = String::from(variables);
    css.push_str(GLOBAL_RESET);
    css.push_str(COMPONENT_CSS);
    for space in crate::Space::ALL {
        let token = space.token();
        let _ = writeln!(
            css,
            ".ui-stack[data-ui-space=\"{token}\"], .ui-cluster[data-ui-space=\"{token}\"] {{ \
             gap: var(--ui-space-{token}); }}"
        );
    }
    let _ = writeln!(
        css,
        "@media {bp1} {{ .ui-dialog-layer {{ padding: var(--ui-space-3); }} }}"
    );
    css
}

/// Stylesheet built from [`FALLBACK_VARIABLES`], used when the token catalog cannot be
/// resolved.
fn fallback_stylesheet() -> String {
    assemble(FALLBACK_VARIABLES, FALLBACK_BP1)
}

#[component]
/// Injects the theme custom properties, global reset, and component rules.
///
/// Mount once near the application root.
pub fn GlobalStyles() -> impl IntoView {
    let css = match ThemeTokens::bundled().and_then(|tokens| stylesheet(&tokens)) {
        Ok(css) => css,
        Err(err) => {
            logging::warn!("theme tokens unavailable, using built-in values: {err}");
            fallback_stylesheet()
        }
    };

    view! { <style data-ui-primitive="true" data-ui-kind="global-styles" inner_html=css></style> }
}
