//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from third-party
//! error types to the unified Error type.

use super::types::Error;

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Xml(format!("Invalid UTF-8 in generated XML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_maps_to_xml() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::Xml(ref msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_image_read_message_names_path() {
        let err = Error::ImageRead {
            path: "pictures/logo.png".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("pictures/logo.png"));
        assert!(message.contains("missing"));
    }
}
