//! Gallery artwork shown on the Gallery page.

/// A single gallery tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    /// Unique display key within the gallery set
    pub id: u32,
    /// Embedded artwork path
    pub image: &'static str,
}

const GALLERY: [GalleryImage; 6] = [
    GalleryImage { id: 1, image: "images/gallery1.svg" },
    GalleryImage { id: 2, image: "images/gallery2.svg" },
    GalleryImage { id: 3, image: "images/gallery3.svg" },
    GalleryImage { id: 4, image: "images/gallery4.svg" },
    GalleryImage { id: 5, image: "images/gallery5.svg" },
    GalleryImage { id: 6, image: "images/gallery6.svg" },
];

/// All gallery images in display order
pub fn gallery_images() -> &'static [GalleryImage] {
    &GALLERY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use std::collections::HashSet;

    #[test]
    fn six_images_with_unique_ids() {
        let ids: HashSet<u32> = gallery_images().iter().map(|g| g.id).collect();
        assert_eq!(gallery_images().len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn every_artwork_is_embedded() {
        for image in gallery_images() {
            assert!(
                Assets::get(image.image).is_some(),
                "missing artwork {}",
                image.image
            );
        }
    }
}
