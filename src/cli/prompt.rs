use std::io::{BufRead, Write};

use squarepad::DEFAULT_QUALITY;

use super::errors::AppError;

pub const SIZE_PROMPT: &str = "What size should the photos be (pixels)? ";
pub const QUALITY_PROMPT: &str = "JPEG quality (default is 80): ";
pub const REPEAT_PROMPT: &str = "Resize more photos? (Y/N): ";

/// Positive pixel count.
pub fn parse_size(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&size| size > 0)
}

/// Blank input means the default quality.
pub fn parse_quality(input: &str) -> Option<u8> {
    let input = input.trim();
    if input.is_empty() {
        return Some(DEFAULT_QUALITY);
    }
    input.parse::<u8>().ok().filter(|&quality| quality <= 100)
}

pub fn parse_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` once the input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask_until<T>(
        &mut self,
        question: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, AppError> {
        loop {
            let Some(line) = self.ask(question)? else {
                return Err(AppError::InputClosed {
                    prompt: question.trim().to_string(),
                });
            };
            match parse(&line) {
                Some(value) => return Ok(value),
                None => self.say(complaint)?,
            }
        }
    }

    pub fn ask_size(&mut self) -> Result<u32, AppError> {
        self.ask_until(
            SIZE_PROMPT,
            "Please enter a whole number of pixels greater than 0.",
            parse_size,
        )
    }

    pub fn ask_quality(&mut self) -> Result<u8, AppError> {
        self.ask_until(
            QUALITY_PROMPT,
            "Please enter a number from 0 to 100, or leave it blank.",
            parse_quality,
        )
    }

    /// A closed input counts as "no".
    pub fn ask_repeat(&mut self) -> Result<bool, AppError> {
        Ok(self.ask(REPEAT_PROMPT)?.is_some_and(|line| parse_yes(&line)))
    }
}
