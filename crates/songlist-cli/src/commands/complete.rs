use anyhow::{bail, Result};
use songlist_core::{input, Completion, SongList};
use std::io::{BufRead, Write};

use crate::console::{Console, PROMPT};

/// Prompt for a song number and mark that song as learned.
pub fn complete_song<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    songs: &mut SongList,
) -> Result<()> {
    if !songs.has_unlearned() {
        console.say("No more songs to learn!")?;
        return Ok(());
    }

    console.say("Enter the number of a song to mark as learned.")?;
    let count = songs.len();
    let number = console.ask_until(PROMPT, |answer| input::song_number(answer, count))?;

    match songs.complete(number) {
        Some(Completion::Learned(song)) => {
            console.say(format!("{} by {} learned", song.title, song.artist))?;
        }
        Some(Completion::AlreadyLearned(song)) => {
            console.say(format!("You have already learned {}", song.title))?;
        }
        None => bail!("song number {} is out of range", number),
    }

    Ok(())
}
