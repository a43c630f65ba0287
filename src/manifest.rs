use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Fixed manifest file name inside each image set directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Directory suffix marking an image set inside the catalog.
pub const IMAGE_SET_SUFFIX: &str = ".imageset";

/// Extension appended to the base name to form the 1x filename.
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageVariant>,
    pub info: Info,
}

/// One scale variant. Field order matters: the asset toolchain expects
/// idiom, filename, scale, and `filename` must be absent (not null) on
/// variants that carry no file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVariant {
    pub idiom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub scale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    pub version: u32,
    pub author: String,
}

impl Contents {
    /// Manifest for a universal-idiom PNG image set: the 1x variant names
    /// `<base>.png`, the 2x and 3x variants are filename-less placeholders.
    pub fn universal_png(base_name: &str) -> Self {
        let variant = |filename: Option<String>, scale: &str| ImageVariant {
            idiom: "universal".to_string(),
            filename,
            scale: scale.to_string(),
        };
        Contents {
            images: vec![
                variant(Some(format!("{base_name}.{IMAGE_EXTENSION}")), "1x"),
                variant(None, "2x"),
                variant(None, "3x"),
            ],
            info: Info {
                version: 1,
                author: "xcode".to_string(),
            },
        }
    }

    /// Renders the manifest as 2-space-indented JSON. Output is byte-stable
    /// for a given base name.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
