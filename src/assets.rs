//! Embedded assets for DAP-GUI
//!
//! Uses rust-embed to bundle the brand artwork at compile time.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Brand logo asset path
pub const LOGO_PATH: &str = "images/logo.svg";

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "images/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_artwork_is_embedded() {
        assert!(Assets::get(LOGO_PATH).is_some());
    }

    #[test]
    fn listing_images_under_prefix() {
        let listed = Assets.list("images/").expect("listing never fails");
        assert!(listed.iter().any(|p| p.as_ref() == LOGO_PATH));
    }
}
