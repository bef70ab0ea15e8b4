//! Centralized icon catalog.
//!
//! Glyphs are 15×15 Radix (modulz) icons drawn with `currentColor`, so they inherit the
//! surrounding text color.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Informational "i" glyph.
    Info,
    /// Exclamation mark glyph.
    Warning,
    /// Dismiss cross.
    Cross,
    /// Angle brackets with a slash.
    Code,
    /// Chain link.
    Link,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Cross => "cross",
            Self::Code => "code",
            Self::Link => "link",
        }
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::Info => {
                "M8.75 3.138c0 .628-.56 1.138-1.25 1.138s-1.25-.51-1.25-1.138C6.25 2.509 6.81 2 7.5 2s1.25.51 1.25 1.138ZM5 5.414h2.5c.46 0 .833.34.833.758v5.31H10V13H5v-1.517H6.667V6.93H5V5.414Z"
            }
            Self::Warning => {
                "M6.114 3.034a.996.996 0 1 1 1.99 0L7.877 8.95a.768.768 0 0 1-1.536 0l-.227-5.916Zm2.104 8.857a1.109 1.109 0 1 1-2.218 0 1.109 1.109 0 0 1 2.218 0Z"
            }
            Self::Cross => {
                "M11.782 4.032a.575.575 0 1 0-.813-.814L7.5 6.687 4.032 3.218a.575.575 0 0 0-.814.814L6.687 7.5l-3.469 3.468a.575.575 0 0 0 .814.814L7.5 8.313l3.469 3.469a.575.575 0 0 0 .813-.814L8.313 7.5l3.469-3.468Z"
            }
            Self::Code => {
                "M9.964 2.686a.5.5 0 1 0-.928-.372l-4 10a.5.5 0 1 0 .928.372l4-10Zm-6.11 2.46a.5.5 0 0 1 0 .708L2.207 7.5l1.647 1.646a.5.5 0 1 1-.708.708l-2-2a.5.5 0 0 1 0-.708l2-2a.5.5 0 0 1 .708 0Zm7.292 0a.5.5 0 0 1 .708 0l2 2a.5.5 0 0 1 0 .708l-2 2a.5.5 0 0 1-.708-.708L12.793 7.5l-1.647-1.646a.5.5 0 0 1 0-.708Z"
            }
            Self::Link => {
                "M8.512 3.005c.676-.46 1.531-.468 2.167-.05.144.094.298.244.71.656.412.412.562.566.657.71.417.636.408 1.49-.051 2.167-.105.155-.267.32-.694.747l-.619.619a.5.5 0 0 0 .708.707l.618-.618.043-.043c.37-.37.606-.606.771-.85.675-.993.71-2.287.06-3.277-.158-.241-.39-.472-.74-.823l-.045-.045-.044-.045c-.352-.351-.583-.582-.824-.74-.99-.65-2.284-.616-3.278.06-.243.165-.48.401-.85.771l-.042.043-.619.619a.5.5 0 1 0 .707.707l.619-.619c.427-.427.593-.59.747-.694ZM4.318 7.147a.5.5 0 0 0-.707-.708l-.619.62-.043.042c-.37.37-.606.606-.771.85-.675.993-.71 2.287-.06 3.277.159.242.39.473.741.824l.045.044.044.046c.351.35.582.581.824.74.99.65 2.284.615 3.278-.06.243-.166.48-.402.85-.772l.042-.043.619-.618a.5.5 0 0 0-.708-.708l-.618.619c-.427.427-.593.59-.747.694-.677.46-1.532.469-2.167.051-.144-.094-.298-.245-.71-.657-.412-.412-.562-.566-.657-.71-.417-.635-.408-1.49.051-2.167.105-.154.267-.32.694-.747l.619-.618Zm5.304-1.061a.5.5 0 0 0-.707-.707L5.379 8.914a.5.5 0 1 0 .707.707l3.536-3.535Z"
            }
        }
    }

    fn svg_body(self) -> String {
        format!(
            r#"<path d="{}" fill="currentColor" fill-rule="evenodd" clip-rule="evenodd"/>"#,
            self.path_data()
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 15px, the glyphs' native grid.
    Sm,
    /// 16px default used by buttons and alerts.
    #[default]
    Md,
    /// 20px prominent icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 15,
            Self::Md => 16,
            Self::Lg => 20,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 15 15"
            width=size_px.clone()
            height=size_px
            fill="none"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconName; 5] = [
        IconName::Info,
        IconName::Warning,
        IconName::Cross,
        IconName::Code,
        IconName::Link,
    ];

    #[test]
    fn every_glyph_is_a_single_current_color_path() {
        for icon in ALL {
            let body = icon.svg_body();
            assert!(body.starts_with("<path d=\"M"), "{}", icon.token());
            assert_eq!(body.matches("<path").count(), 1);
            assert!(body.contains("fill=\"currentColor\""));
        }
    }
}
