//! Style value objects and the registries that name them.
//!
//! Styles are plain values. A formatted element owns its style; at
//! serialization time equal styles are collapsed into one automatic
//! declaration by [`AutomaticStyles`]. Named styles live in
//! [`CommonStyles`] and are referenced by their display name.

mod automatic;
mod border;
mod common;
mod family;
mod font_face;
mod list;
mod name;
mod paragraph;
mod tab_stop;
mod text;
mod value;

pub use automatic::{AutomaticStyle, AutomaticStyles};
pub use border::{Border, BorderStyle};
pub use common::{CommonStyle, CommonStyles};
pub use family::StyleFamily;
pub use font_face::{FontFace, FontFaceDeclarations, FontFamilyGeneric, FontPitch};
pub use list::{
    LabelFollowedBy, ListLevelKind, ListLevelProperties, ListLevelStyle, ListStyle,
    MAX_LIST_LEVEL, NumberFormat,
};
pub use name::style_name_from_display_name;
pub use paragraph::{
    BorderSide, HorizontalAlignment, LastLineAlignment, LineHeight, ParagraphProperties,
    ParagraphStyle, VerticalAlignment,
};
pub use tab_stop::{LeaderStyle, TabStop, TabStopType};
pub use text::{
    FontStyle, FontVariant, FontWeight, TextProperties, TextStyle, TextTransform, Underline,
};
pub use value::{Style, StyleValue};
