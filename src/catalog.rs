//! Album catalog data model and the line-oriented catalog file loader.
//!
//! The catalog is loaded once at startup and stays fixed afterwards, with one
//! exception: the context menu's Delete action removes a single album. Track
//! ordering is whatever the catalog file says; it is preserved verbatim even
//! where it disagrees with an album's real track order.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog file ended early (expected {0})")]
    UnexpectedEof(&'static str),
}

/// Closed genre taxonomy. Id 0 ("Null") exists in the data but is never a
/// selectable row in the Genres view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    None,
    Pop,
    Edm,
    Rap,
    Rnb,
    Dnb,
    Various,
}

impl Genre {
    /// The genres offered as rows in the Genres tab, in display order.
    pub const SELECTABLE: [Genre; 6] = [
        Genre::Pop,
        Genre::Edm,
        Genre::Rap,
        Genre::Rnb,
        Genre::Dnb,
        Genre::Various,
    ];

    /// Maps a catalog-file genre id to a genre. Unknown ids fold into `None`.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Genre::Pop,
            2 => Genre::Edm,
            3 => Genre::Rap,
            4 => Genre::Rnb,
            5 => Genre::Dnb,
            6 => Genre::Various,
            _ => Genre::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::None => "Null",
            Genre::Pop => "Pop",
            Genre::Edm => "EDM",
            Genre::Rap => "Rap",
            Genre::Rnb => "R&B",
            Genre::Dnb => "Drum & Bass",
            Genre::Various => "Various",
        }
    }
}

/// A single playable track. Immutable once constructed; `PartialEq` backs the
/// value-based playlist removal operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub name: String,
    pub location: PathBuf,
    /// Display string straight from the catalog file (e.g. "3:42").
    pub length: String,
}

#[derive(Clone, Debug)]
pub struct Album {
    /// Load-time catalog position; stable identity for detail views, the
    /// context menu and deletion.
    pub id: usize,
    pub artist: String,
    pub title: String,
    pub year: String,
    pub genre: Genre,
    pub image_path: String,
    pub tracks: Vec<Track>,
}

/// The full album collection, in catalog-file order.
#[derive(Debug, Default)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn album(&self, id: usize) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    /// Removes an album by identity. Returns false if it was already gone.
    pub fn remove(&mut self, id: usize) -> bool {
        let before = self.albums.len();
        self.albums.retain(|a| a.id != id);
        self.albums.len() != before
    }

    /// All album ids whose genre matches, in catalog order.
    pub fn filter_by_genre(&self, genre: Genre) -> Vec<usize> {
        self.albums
            .iter()
            .filter(|a| a.genre == genre)
            .map(|a| a.id)
            .collect()
    }
}

struct LineReader {
    lines: Lines<BufReader<File>>,
}

impl LineReader {
    fn next_line(&mut self, expected: &'static str) -> Result<String, CatalogError> {
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(CatalogError::UnexpectedEof(expected)),
        }
    }

    /// Counts parse leniently: garbage reads as zero, matching the upstream
    /// file format's behavior.
    fn next_count(&mut self, expected: &'static str) -> Result<usize, CatalogError> {
        Ok(self.next_line(expected)?.trim().parse().unwrap_or(0))
    }
}

/// Loads the catalog from the line-oriented albums file.
///
/// Format: album count on the first line; per album the artist, title, year,
/// genre-id and image-path lines, then a track count followed by
/// name/location/length lines per track.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::Missing(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = LineReader {
        lines: BufReader::new(file).lines(),
    };

    let count = reader.next_count("album count")?;
    let mut albums = Vec::with_capacity(count);
    for id in 0..count {
        albums.push(read_album(&mut reader, id)?);
    }

    tracing::info!(albums = albums.len(), path = %path.display(), "Catalog loaded");
    Ok(Catalog { albums })
}

fn read_album(reader: &mut LineReader, id: usize) -> Result<Album, CatalogError> {
    let artist = reader.next_line("album artist")?.trim().to_string();
    let title = reader.next_line("album title")?.trim().to_string();
    let year = reader.next_line("album year")?.trim().to_string();
    let genre_id: u32 = reader.next_line("album genre")?.trim().parse().unwrap_or(0);
    let image_path = reader.next_line("album image path")?.trim().to_string();
    let tracks = read_tracks(reader)?;

    Ok(Album {
        id,
        artist,
        title,
        year,
        genre: Genre::from_id(genre_id),
        image_path,
        tracks,
    })
}

fn read_tracks(reader: &mut LineReader) -> Result<Vec<Track>, CatalogError> {
    let count = reader.next_count("track count")?;
    let mut tracks = Vec::with_capacity(count);
    for _ in 0..count {
        let name = reader.next_line("track name")?.trim().to_string();
        let location = PathBuf::from(reader.next_line("track location")?.trim());
        let length = reader.next_line("track length")?.trim().to_string();
        tracks.push(Track {
            name,
            location,
            length,
        });
    }
    Ok(tracks)
}
