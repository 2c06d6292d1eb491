use serde::{Deserialize, Serialize};

/// The two faces a cover sheet uses. The backend maps them to concrete fonts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Font {
    #[default]
    Regular,
    Bold,
}

impl Font {
    pub fn from_bold(bold: bool) -> Self {
        if bold { Font::Bold } else { Font::Regular }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}
