//! The user's single playlist: a lazily-created track queue.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Track;

pub const PLAYLIST_TITLE: &str = "My Playlist";

/// The playlist only exists after the first track is added; the model holds
/// it as `Option<Playlist>` and shuffle/clear never create one.
#[derive(Debug, Default)]
pub struct Playlist {
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end; duplicates are allowed.
    pub fn add(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tracks.shuffle(rng);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Removes every track equal in value to the element at `cursor`, if the
    /// cursor is in bounds. The cursor points at the track that was just
    /// advanced *to*, not the one that finished, so a mid-run consume shifts
    /// later tracks under the cursor. Kept as-is; see
    /// [`Playlist::consume_by_identity`] for the index-stable form.
    pub fn consume_at_cursor(&mut self, cursor: usize) {
        if let Some(target) = self.tracks.get(cursor).cloned() {
            self.tracks.retain(|t| *t != target);
        }
    }

    /// Removes the first track equal in value to `finished`.
    pub fn consume_by_identity(&mut self, finished: &Track) {
        if let Some(pos) = self.tracks.iter().position(|t| t == finished) {
            self.tracks.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    fn track(name: &str) -> Track {
        Track {
            name: name.into(),
            location: PathBuf::from(format!("sounds/{name}.mp3")),
            length: "3:00".into(),
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));
        playlist.add(track("a"));
        let names: Vec<_> = playlist.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }

    #[test]
    fn shuffle_preserves_the_multiset_of_tracks() {
        let mut playlist = Playlist::new();
        for name in ["a", "b", "c", "d", "e"] {
            playlist.add(track(name));
        }
        let mut expected = playlist.tracks.clone();

        let mut rng = StdRng::seed_from_u64(7);
        playlist.shuffle(&mut rng);

        let mut got = playlist.tracks.clone();
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        got.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(got, expected);
    }

    #[test]
    fn shuffle_and_clear_are_noops_on_empty() {
        let mut playlist = Playlist::new();
        let mut rng = StdRng::seed_from_u64(0);
        playlist.shuffle(&mut rng);
        playlist.clear();
        assert!(playlist.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.add(track("b"));
        playlist.clear();
        assert!(playlist.is_empty());
    }

    #[test]
    fn consume_at_cursor_removes_all_copies_of_the_cursor_track() {
        let mut playlist = Playlist::new();
        for name in ["a", "b", "a", "c"] {
            playlist.add(track(name));
        }
        // Cursor 1 lands on "b"; cursor 0 afterwards lands on "a" and takes
        // both copies out.
        playlist.consume_at_cursor(1);
        let names: Vec<_> = playlist.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "a", "c"]);

        playlist.consume_at_cursor(0);
        let names: Vec<_> = playlist.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c"]);
    }

    #[test]
    fn consume_at_cursor_out_of_bounds_is_a_noop() {
        let mut playlist = Playlist::new();
        playlist.add(track("a"));
        playlist.consume_at_cursor(5);
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn consume_by_identity_removes_only_the_first_occurrence() {
        let mut playlist = Playlist::new();
        for name in ["a", "b", "a"] {
            playlist.add(track(name));
        }
        playlist.consume_by_identity(&track("a"));
        let names: Vec<_> = playlist.tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);

        playlist.consume_by_identity(&track("missing"));
        assert_eq!(playlist.len(), 2);
    }
}
