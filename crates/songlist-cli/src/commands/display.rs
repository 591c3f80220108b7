use anyhow::Result;
use songlist_core::{listing, SongList};
use std::io::{BufRead, Write};

use crate::console::Console;

/// Sort the list by year and title, then print it with a learned summary.
///
/// The sort is kept: later song numbers refer to this order.
pub fn display_songs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    songs: &mut SongList,
) -> Result<()> {
    if songs.is_empty() {
        console.say("Song list is empty!")?;
        return Ok(());
    }

    songs.sort_for_display();

    for line in listing::render(songs) {
        console.say(line)?;
    }
    console.say(listing::summary(songs))?;

    Ok(())
}
