//! Picture component: an opaque image blob.

use super::Component;
use crate::decoder::{Decoder, Format};
use crate::error::ComponentError;
use std::any::Any;
use std::io::Read;

/// Extensions claimed by [`PictureDecoder`].
///
/// Dispatch compares extensions exactly, so the lower, upper and capitalized
/// spellings are listed. Other mixed spellings such as `.jPG` are not claimed.
pub const PICTURE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".bmp", ".gif", ".JPG", ".JPEG", ".PNG", ".BMP", ".GIF", ".Jpg",
    ".Jpeg", ".Png", ".Bmp", ".Gif",
];

/// An image. Pictures are listed after every other component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub id: String,
    pub data: Vec<u8>,
}

impl Component for Picture {
    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> f64 {
        f64::MAX
    }

    fn encode(&self) -> Result<Vec<u8>, ComponentError> {
        Ok(self.data.clone())
    }

    fn kind(&self) -> &'static str {
        "picture"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Decoder for image files. The identifier keeps its extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct PictureDecoder;

impl Decoder for PictureDecoder {
    fn format(&self) -> Format {
        Format::new("", PICTURE_EXTENSIONS.iter().copied())
    }

    fn decode(&self, id: &str, reader: &mut dyn Read) -> Result<Box<dyn Component>, ComponentError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Box::new(Picture {
            id: id.to_string(),
            data,
        }))
    }

    fn kind(&self) -> &'static str {
        "picture"
    }
}
