//! The in-memory song list.
//!
//! Song numbers are 1-based positions in the list's current order. That
//! order is insertion order until [`SongList::sort_for_display`] runs, after
//! which it stays sorted (and is saved that way) until more songs are added.

use crate::model::Song;

/// Result of marking a song as learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<'a> {
    /// The song was unlearned and is now learned.
    Learned(&'a Song),
    /// The song was already learned; nothing changed.
    AlreadyLearned(&'a Song),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongList {
    songs: Vec<Song>,
}

impl SongList {
    #[must_use]
    pub const fn new() -> Self {
        Self { songs: Vec::new() }
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Append a song to the end of the list.
    pub fn push(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Sort in place by year, then title.
    pub fn sort_for_display(&mut self) {
        self.songs
            .sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));
    }

    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.songs.iter().filter(|song| song.learned).count()
    }

    #[must_use]
    pub fn unlearned_count(&self) -> usize {
        self.len() - self.learned_count()
    }

    /// Whether any song is still to learn. False for an empty list.
    #[must_use]
    pub fn has_unlearned(&self) -> bool {
        self.songs.iter().any(|song| !song.learned)
    }

    /// Mark the song at a 1-based song number as learned.
    ///
    /// Returns `None` when the number is outside `1..=len`.
    pub fn complete(&mut self, number: usize) -> Option<Completion<'_>> {
        let song = self.songs.get_mut(number.checked_sub(1)?)?;
        let was_learned = std::mem::replace(&mut song.learned, true);
        if was_learned {
            Some(Completion::AlreadyLearned(song))
        } else {
            Some(Completion::Learned(song))
        }
    }
}

impl From<Vec<Song>> for SongList {
    fn from(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}
