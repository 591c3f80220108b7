//! Column-aligned text rendering of a song list.

use unicode_width::UnicodeWidthStr;

use crate::list::SongList;

/// Status column for songs still to learn; learned songs get a space.
pub const UNLEARNED_STATUS: char = '*';
pub const LEARNED_STATUS: char = ' ';

/// Render one line per song, numbered from 1 in list order.
///
/// Titles and artists are padded to the widest entry in their column, and
/// numbers are right-aligned to the width of the largest number.
pub fn render(list: &SongList) -> Vec<String> {
    let songs = list.songs();
    let title_width = songs.iter().map(|s| s.title.width()).max().unwrap_or(0);
    let artist_width = songs.iter().map(|s| s.artist.width()).max().unwrap_or(0);
    let number_width = songs.len().to_string().len();

    songs
        .iter()
        .enumerate()
        .map(|(index, song)| {
            let status = if song.learned {
                LEARNED_STATUS
            } else {
                UNLEARNED_STATUS
            };
            format!(
                "{:>number_width$}. {} {}{} - {}{} ({})",
                index + 1,
                status,
                song.title,
                padding(&song.title, title_width),
                song.artist,
                padding(&song.artist, artist_width),
                song.year,
            )
        })
        .collect()
}

/// The learned / still-to-learn totals line.
pub fn summary(list: &SongList) -> String {
    format!(
        "{} songs learned, {} songs still to learn.",
        list.learned_count(),
        list.unlearned_count()
    )
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}
