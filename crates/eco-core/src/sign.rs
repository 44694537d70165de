//! Sign-Language Selector
//!
//! Maps a selected word to a static image path.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Words offered in the selector (value, label)
pub const SIGN_WORDS: &[(&str, &str)] = &[
    ("hello", "Hello"),
    ("thank-you", "Thank you"),
    ("recycle", "Recycle"),
    ("earth", "Earth"),
    ("tree", "Tree"),
    ("water", "Water"),
];

pub const SIGN_PLACEHOLDER: &str = "Select a word to see its sign.";

/// Directory holding one image per word
const SIGN_IMAGE_DIR: &str = "signs";

/// Keeps the value a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignSelection {
    Placeholder,
    Image { src: String, alt: String },
}

impl SignSelection {
    /// Empty value shows the placeholder; anything else becomes an image path.
    /// The image is not checked for existence.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            return SignSelection::Placeholder;
        }
        let encoded = utf8_percent_encode(value, SEGMENT_ENCODE_SET).to_string();
        SignSelection::Image {
            src: format!("{}/{}.png", SIGN_IMAGE_DIR, encoded),
            alt: format!("Sign for {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_placeholder() {
        assert_eq!(SignSelection::from_value(""), SignSelection::Placeholder);
    }

    #[test]
    fn test_known_word() {
        assert_eq!(
            SignSelection::from_value("hello"),
            SignSelection::Image {
                src: "signs/hello.png".to_string(),
                alt: "Sign for hello".to_string(),
            }
        );
    }

    #[test]
    fn test_value_is_encoded() {
        match SignSelection::from_value("thank you") {
            SignSelection::Image { src, .. } => assert_eq!(src, "signs/thank%20you.png"),
            other => panic!("expected image, got {:?}", other),
        }
        match SignSelection::from_value("../secret") {
            SignSelection::Image { src, .. } => assert_eq!(src, "signs/..%2Fsecret.png"),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_hyphen_kept() {
        match SignSelection::from_value("thank-you") {
            SignSelection::Image { src, .. } => assert_eq!(src, "signs/thank-you.png"),
            other => panic!("expected image, got {:?}", other),
        }
    }
}
