//! The download pipeline - orchestrates the full grab of one track.
//!
//! # Architecture
//!
//! The pipeline sequences five external collaborators behind the traits in
//! [`traits`]:
//! 1. Probe the URL for its raw title and thumbnails (no download)
//! 2. Normalize the raw title into (song, artist) via the language model
//! 3. Download and transcode, named after the cleaned identity
//! 4. Look up album/year in the catalog
//! 5. Fetch the cover image and embed it while tagging
//!
//! The probe/materialize double fetch is deliberate: the output filename
//! depends on the cleaned title, which depends on the probe.
//!
//! Error policy: the two hard stages (media fetch, tag write) propagate
//! failures and abort the run. Normalization, catalog lookup, and cover
//! fetch degrade to defaults internally, so the pipeline always finishes
//! with an audio file tagged with whatever metadata was obtainable. Nothing
//! is retried.

pub mod traits;

pub use traits::{CatalogApi, CoverSource, MediaSource, TitleSource};

use std::path::PathBuf;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::cover::CoverFetcher;
use crate::error::{Result, ResultExt};
use crate::fetcher::MediaFetcher;
use crate::normalizer::TitleNormalizer;
use crate::tagger;

/// The pipeline, generic over its collaborators so tests can run it
/// end-to-end with mocks.
pub struct Pipeline<M, T, C, V> {
    media: M,
    titles: T,
    catalog: C,
    covers: V,
}

impl Pipeline<MediaFetcher, TitleNormalizer, CatalogClient, CoverFetcher> {
    /// Assemble the production pipeline from the application config.
    pub fn new(config: &Config) -> Self {
        Self {
            media: MediaFetcher::new(config),
            titles: TitleNormalizer::new(config),
            catalog: CatalogClient::new(),
            covers: CoverFetcher::new(config.output.directory.clone()),
        }
    }
}

impl<M, T, C, V> Pipeline<M, T, C, V>
where
    M: MediaSource,
    T: TitleSource,
    C: CatalogApi,
    V: CoverSource,
{
    /// Run the full pipeline for one URL and return the tagged file's path.
    pub async fn run(&self, url: &str) -> Result<PathBuf> {
        println!("[1/9] Probing source...");
        let info = self.media.probe(url).await?;

        println!("[2/9] Cleaning title/artist...");
        let identity = self.titles.normalize(&info.title).await;

        println!("[3/9] Clean metadata: {} - {}", identity.song, identity.artist);

        println!("[4/9] Downloading audio as \"{}\"...", identity.display_name());
        let audio_path = self.media.materialize(url, &identity.display_name()).await?;

        println!("[5/9] Looking up catalog metadata...");
        let record = self.catalog.lookup(&identity.song, &identity.artist).await;

        println!("[6/9] Album/Year: {}/{}", record.album, record.year);

        println!("[7/9] Downloading cover art...");
        let cover_path = self.covers.fetch_cover(info.best_thumbnail(), &identity).await;
        match &cover_path {
            Some(path) => println!("      ✓ Cover saved: {}", path.display()),
            None => println!("      ⚠ No cover available"),
        }

        println!("[8/9] Writing tags...");
        tagger::write_tags(&audio_path, &identity, &record, cover_path.as_deref())
            .with_context(format!("Tagging {}", audio_path.display()))?;

        println!("[9/9] Done! Saved: {}", audio_path.display());
        Ok(audio_path)
    }
}
