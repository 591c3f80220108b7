use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt shown for menu choices and song numbers.
pub const PROMPT: &str = ">>> ";

/// Line-oriented prompts over any input/output pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print a prompt and read one line, without its line ending.
    ///
    /// Closed input is an `UnexpectedEof` error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Keep asking until `validate` accepts the answer, printing each rejection.
    pub fn ask_until<T, E: Display>(
        &mut self,
        prompt: &str,
        mut validate: impl FnMut(&str) -> Result<T, E>,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(reason)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
