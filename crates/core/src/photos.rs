//! Photo catalog.
//!
//! The games only need to know how many photos exist and a stable id for
//! each; the label and source are for whoever draws them. A catalog is
//! either the built-in family album or a list of user-supplied files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{GameError, Result};

/// Stable index of a photo in its catalog.
pub type PhotoId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PhotoSource {
    Builtin(&'static str),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub id: PhotoId,
    pub label: String,
    pub source: PhotoSource,
}

const BUILTIN: [(&str, &str); 12] = [
    ("beach", "Beach Day"),
    ("cake", "Birthday Cake"),
    ("puppy", "Puppy"),
    ("garden", "Garden"),
    ("grandma", "Grandma"),
    ("snowman", "Snowman"),
    ("picnic", "Picnic"),
    ("bicycle", "Bicycle"),
    ("sunset", "Sunset"),
    ("playground", "Playground"),
    ("kitten", "Kitten"),
    ("camping", "Camping"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoCatalog {
    photos: Vec<Photo>,
}

impl PhotoCatalog {
    /// The built-in family album.
    pub fn builtin() -> Self {
        let photos = BUILTIN
            .iter()
            .enumerate()
            .map(|(id, &(name, label))| Photo {
                id,
                label: label.to_string(),
                source: PhotoSource::Builtin(name),
            })
            .collect();
        Self { photos }
    }

    /// User-supplied image files, in the given order.
    pub fn from_files<I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let photos: Vec<Photo> = paths
            .into_iter()
            .enumerate()
            .map(|(id, path)| Photo {
                id,
                label: label_for(&path),
                source: PhotoSource::File(path),
            })
            .collect();
        if photos.is_empty() {
            return Err(GameError::NotEnoughPhotos {
                needed: 1,
                available: 0,
            });
        }
        Ok(Self { photos })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    /// Fail unless at least `needed` photos are available.
    pub fn require(&self, needed: usize) -> Result<()> {
        if self.photos.len() < needed {
            return Err(GameError::NotEnoughPhotos {
                needed,
                available: self.photos.len(),
            });
        }
        Ok(())
    }

    /// Fail unless `id` names a photo in this catalog.
    pub fn check(&self, id: PhotoId) -> Result<()> {
        if id >= self.photos.len() {
            return Err(GameError::PhotoOutOfRange {
                id,
                len: self.photos.len(),
            });
        }
        Ok(())
    }
}

impl Default for PhotoCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Title-cased file stem: `summer_trip-2.jpg` becomes `Summer Trip 2`.
fn label_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
