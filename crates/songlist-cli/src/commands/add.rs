use anyhow::Result;
use songlist_core::{input, Song, SongList};
use std::io::{BufRead, Write};

use crate::console::Console;

/// Prompt for a new song and append it, unlearned.
pub fn add_song<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    songs: &mut SongList,
) -> Result<()> {
    console.say("Enter details for a new song.")?;

    let title = console.ask_until("Title: ", input::required_text)?;
    let artist = console.ask_until("Artist: ", input::required_text)?;
    let (year_text, year) = console.ask_until("Year: ", |answer| {
        input::year(answer).map(|year| (answer.to_string(), year))
    })?;

    // Echo the year as typed.
    console.say(format!(
        "{} by {} ({}) added to song list.",
        title, artist, year_text
    ))?;
    songs.push(Song::new(title, artist, year));
    log::debug!("Song list now holds {} songs", songs.len());

    Ok(())
}
