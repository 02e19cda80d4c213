//! Audio file tag writing.
//!
//! Uses the lofty crate for format-independent metadata access. The file
//! type is probed from content rather than the extension, since transcoded
//! downloads occasionally carry a mismatched suffix.
//!
//! Writing happens in two passes: text tags are committed first, then the
//! cover image is embedded in a second save. A failed embed leaves the
//! already-written text tags in place - partial tagging is an accepted
//! outcome.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt};
use std::path::Path;

use crate::domain::{CatalogRecord, TrackIdentity};
use crate::error::{Error, Result};

/// Write identity and catalog metadata to the file's tags, embedding the
/// cover image when one is available.
///
/// The file must exist - mutating a missing file is a logic error, and the
/// resulting [`Error::NotFound`] is the pipeline's one hard precondition
/// beyond the fetch itself. Title and artist are always written; album and
/// year only when non-empty, so absent metadata never creates blank tag
/// entries.
pub fn write_tags(
    path: &Path,
    identity: &TrackIdentity,
    record: &CatalogRecord,
    cover: Option<&Path>,
) -> Result<()> {
    if !path.exists() {
        return Err(Error::not_found(path));
    }

    write_text_tags(path, identity, record)?;

    if let Some(cover_path) = cover {
        if cover_path.exists() {
            if let Err(e) = embed_cover(path, cover_path) {
                // Text tags are already committed; keep them
                tracing::warn!("Failed to embed cover art: {}", e);
            } else {
                tracing::debug!("Embedded cover art from {:?}", cover_path);
            }
        }
    }

    Ok(())
}

/// Write the text tag fields and save.
fn write_text_tags(path: &Path, identity: &TrackIdentity, record: &CatalogRecord) -> Result<()> {
    let mut tagged_file = open_tagged(path)?;
    let tag = primary_tag_mut(&mut tagged_file);

    tag.set_title(identity.song.clone());
    tag.set_artist(identity.artist.clone());

    if !record.album.is_empty() {
        tag.set_album(record.album.clone());
    }
    if !record.year.is_empty() {
        if let Ok(year) = record.year.parse::<u32>() {
            tag.set_year(year);
        } else {
            // Non-numeric date strings survive verbatim
            tag.insert_text(ItemKey::RecordingDate, record.year.clone());
        }
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::tag(path, format!("Failed to write tags: {}", e)))
}

/// Replace any embedded pictures with a single front cover.
fn embed_cover(path: &Path, cover_path: &Path) -> Result<()> {
    let data = std::fs::read(cover_path)?;

    let mut tagged_file = open_tagged(path)?;
    let tag = primary_tag_mut(&mut tagged_file);

    // Remove pre-existing covers so repeated tagging runs don't stack images
    while !tag.pictures().is_empty() {
        tag.remove_picture(0);
    }

    tag.push_picture(Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Jpeg),
        Some("Cover".to_string()),
        data,
    ));

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::tag(path, format!("Failed to embed cover: {}", e)))
}

/// Open a file and read its tags, probing the type from content.
fn open_tagged(path: &Path) -> Result<lofty::file::TaggedFile> {
    Probe::open(path)
        .map_err(|e| Error::tag(path, format!("Failed to open file: {}", e)))?
        .guess_file_type()
        .map_err(|e| Error::tag(path, format!("Failed to probe file type: {}", e)))?
        .read()
        .map_err(|e| Error::tag(path, format!("Failed to read file: {}", e)))
}

/// Get the primary tag for the file's format, inserting one if absent.
fn primary_tag_mut(tagged_file: &mut lofty::file::TaggedFile) -> &mut Tag {
    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag_mut(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    tagged_file.tag_mut(tag_type).expect("Just inserted tag")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{temp_output_dir, write_test_wav};

    fn read_primary_tag(path: &Path) -> Tag {
        let tagged = open_tagged(path).expect("Failed to re-read tagged file");
        tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .expect("No tag found after write")
            .clone()
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = write_tags(
            Path::new("/nonexistent/song.mp3"),
            &TrackIdentity::new("Song", "Artist"),
            &CatalogRecord::default(),
            None,
        );
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_title_and_artist_always_written() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");

        write_tags(
            &path,
            &TrackIdentity::new("Song Name", "Artist"),
            &CatalogRecord::default(),
            None,
        )
        .unwrap();

        let tag = read_primary_tag(&path);
        assert_eq!(tag.title().as_deref(), Some("Song Name"));
        assert_eq!(tag.artist().as_deref(), Some("Artist"));
    }

    #[test]
    fn test_empty_album_year_leave_keys_absent() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");

        write_tags(
            &path,
            &TrackIdentity::new("Song", "Artist"),
            &CatalogRecord::default(),
            None,
        )
        .unwrap();

        let tag = read_primary_tag(&path);
        assert!(tag.album().is_none());
        assert!(tag.year().is_none());
    }

    #[test]
    fn test_non_empty_album_year_written_exactly() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");

        write_tags(
            &path,
            &TrackIdentity::new("Song", "Artist"),
            &CatalogRecord {
                album: "Test Album".to_string(),
                year: "1975".to_string(),
            },
            None,
        )
        .unwrap();

        let tag = read_primary_tag(&path);
        assert_eq!(tag.album().as_deref(), Some("Test Album"));
        assert_eq!(tag.year(), Some(1975));
    }

    #[test]
    fn test_second_cover_replaces_first() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");
        let identity = TrackIdentity::new("Song", "Artist");

        let cover1 = dir.path().join("cover1.jpg");
        let cover2 = dir.path().join("cover2.jpg");
        std::fs::write(&cover1, b"first image bytes").unwrap();
        std::fs::write(&cover2, b"second image bytes").unwrap();

        write_tags(&path, &identity, &CatalogRecord::default(), Some(&cover1)).unwrap();
        write_tags(&path, &identity, &CatalogRecord::default(), Some(&cover2)).unwrap();

        let tag = read_primary_tag(&path);
        assert_eq!(tag.pictures().len(), 1);
        assert_eq!(tag.pictures()[0].data(), b"second image bytes");
        assert_eq!(tag.pictures()[0].pic_type(), PictureType::CoverFront);
    }

    #[test]
    fn test_failed_embed_keeps_text_tags() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");

        // A directory "exists" as a cover path but can't be read as bytes
        let bad_cover = dir.path().join("not-a-file");
        std::fs::create_dir(&bad_cover).unwrap();

        write_tags(
            &path,
            &TrackIdentity::new("Song", "Artist"),
            &CatalogRecord::default(),
            Some(&bad_cover),
        )
        .unwrap();

        let tag = read_primary_tag(&path);
        assert_eq!(tag.title().as_deref(), Some("Song"));
        assert!(tag.pictures().is_empty());
    }

    #[test]
    fn test_missing_cover_path_is_skipped() {
        let dir = temp_output_dir();
        let path = write_test_wav(dir.path(), "track.wav");

        write_tags(
            &path,
            &TrackIdentity::new("Song", "Artist"),
            &CatalogRecord::default(),
            Some(Path::new("/nonexistent/cover.jpg")),
        )
        .unwrap();

        let tag = read_primary_tag(&path);
        assert!(tag.pictures().is_empty());
    }
}
