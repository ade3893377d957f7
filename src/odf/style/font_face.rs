//! Font face declarations (`office:font-face-decls`).

/// Generic font family (`style:font-family-generic`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamilyGeneric {
    Roman,
    Swiss,
    Modern,
    Decorative,
    Script,
    System,
}

impl FontFamilyGeneric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roman => "roman",
            Self::Swiss => "swiss",
            Self::Modern => "modern",
            Self::Decorative => "decorative",
            Self::Script => "script",
            Self::System => "system",
        }
    }
}

/// Font pitch (`style:font-pitch`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontPitch {
    Fixed,
    Variable,
}

impl FontPitch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
        }
    }
}

/// A `style:font-face` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFace {
    name: String,
    font_family: String,
    generic: Option<FontFamilyGeneric>,
    pitch: Option<FontPitch>,
}

impl FontFace {
    /// Declare a font whose family is the same as its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            font_family: name.clone(),
            name,
            generic: None,
            pitch: None,
        }
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_generic(mut self, generic: FontFamilyGeneric) -> Self {
        self.generic = Some(generic);
        self
    }

    pub fn with_pitch(mut self, pitch: FontPitch) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Name referenced by `style:font-name`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `svg:font-family`
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn generic(&self) -> Option<FontFamilyGeneric> {
        self.generic
    }

    pub fn pitch(&self) -> Option<FontPitch> {
        self.pitch
    }
}

/// Append-only set of font faces, in declaration order.
/// The first declaration of a name wins.
#[derive(Debug, Clone, Default)]
pub struct FontFaceDeclarations {
    faces: Vec<FontFace>,
}

impl FontFaceDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font face. Returns `false` if the name was already declared.
    pub fn add(&mut self, face: FontFace) -> bool {
        if self.get(face.name()).is_some() {
            return false;
        }
        self.faces.push(face);
        true
    }

    pub fn get(&self, name: &str) -> Option<&FontFace> {
        self.faces.iter().find(|face| face.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontFace> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declaration_wins() {
        let mut faces = FontFaceDeclarations::new();
        assert!(faces.add(FontFace::new("Liberation Serif").with_generic(FontFamilyGeneric::Roman)));
        assert!(!faces.add(FontFace::new("Liberation Serif").with_pitch(FontPitch::Fixed)));
        assert_eq!(faces.len(), 1);
        let face = faces.get("Liberation Serif").unwrap();
        assert_eq!(face.generic(), Some(FontFamilyGeneric::Roman));
        assert_eq!(face.pitch(), None);
    }

    #[test]
    fn test_font_family_defaults_to_name() {
        let face = FontFace::new("DejaVu Sans");
        assert_eq!(face.font_family(), "DejaVu Sans");
        let face = face.with_font_family("'DejaVu Sans'");
        assert_eq!(face.font_family(), "'DejaVu Sans'");
    }
}
