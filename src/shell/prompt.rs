use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::warn;

/// Line-oriented question/answer helper over any reader and writer.
///
/// Questions that expect a number or a yes/no answer keep asking until the
/// answer is acceptable. Running out of input is an error.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write prompt output")
    }

    /// Prompt with a message and return the trimmed answer.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before all questions were answered");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt with a default value. Returns the default if the answer is empty.
    pub fn ask_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} [{}]: ", message, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Keep asking until the answer is non-empty.
    pub fn ask_non_empty(&mut self, message: &str, what: &str) -> Result<String> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(format!("  {} is required.", what))?;
        }
    }

    /// Ask for a number in `[min, max]`, optionally pre-filled with a default.
    pub fn ask_number(
        &mut self,
        message: &str,
        min: f64,
        max: f64,
        default: Option<f64>,
    ) -> Result<f64> {
        loop {
            let answer = match default {
                Some(d) => self.ask_with_default(message, &d.to_string())?,
                None => self.ask(&format!("{}: ", message))?,
            };
            match parse_number(&answer) {
                Some(value) if (min..=max).contains(&value) => return Ok(value),
                _ => {
                    warn!(answer = %answer, min, max, "rejected numeric answer");
                    self.say(format!(
                        "  Invalid: enter a number between {} and {}. Try again.",
                        min, max
                    ))?;
                }
            }
        }
    }

    /// Ask for a whole number in `[min, max]`.
    pub fn ask_count(&mut self, message: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            let answer = self.ask(&format!("{} ({}-{}): ", message, min, max))?;
            match answer.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => {
                    warn!(answer = %answer, min, max, "rejected count answer");
                    self.say(format!(
                        "  Invalid: enter a whole number between {} and {}. Try again.",
                        min, max
                    ))?;
                }
            }
        }
    }

    /// Ask a yes/no question. With a default, an empty answer picks it.
    pub fn ask_yes_no(&mut self, message: &str, default: Option<bool>) -> Result<bool> {
        let hint = match default {
            Some(true) => "Y/n",
            Some(false) => "y/N",
            None => "y/n",
        };
        loop {
            let answer = self.ask(&format!("{} [{}]: ", message, hint))?;
            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => {
                    warn!(answer = %answer, "rejected yes/no answer");
                    self.say("  Invalid: answer y or n. Try again.")?;
                }
            }
        }
    }
}

/// Parse a yes/no answer. Accepts English and Spanish forms, case-insensitive.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "sí" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a finite number, accepting a decimal comma.
pub fn parse_number(answer: &str) -> Option<f64> {
    answer
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask("Say: ").unwrap(), "hello");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Say: ");
    }

    #[test]
    fn test_ask_errors_on_eof() {
        let mut p = prompter("");
        assert!(p.ask("Say: ").is_err());
    }

    #[test]
    fn test_ask_with_default_uses_default_on_empty() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_with_default("Cap", "20").unwrap(), "20");
    }

    #[test]
    fn test_ask_non_empty_reprompts() {
        let mut p = prompter("\n   \nExam\n");
        assert_eq!(p.ask_non_empty("Name: ", "Name").unwrap(), "Exam");
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Name is required.").count(), 2);
    }

    #[test]
    fn test_ask_number_reprompts_until_in_range() {
        let mut p = prompter("abc\n25\n-1\n17,5\n");
        let value = p.ask_number("Score", 0.0, 20.0, None).unwrap();
        assert_eq!(value, 17.5);
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches("Invalid").count(), 3);
    }

    #[test]
    fn test_ask_number_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_number("Extra", 0.0, 5.0, Some(1.5)).unwrap(), 1.5);
    }

    #[test]
    fn test_ask_count_rejects_fractions() {
        let mut p = prompter("2.5\n0\n11\n3\n");
        assert_eq!(p.ask_count("How many", 1, 10).unwrap(), 3);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("maybe\nSí\n");
        assert!(p.ask_yes_no("Attended?", None).unwrap());

        let mut p = prompter("\n");
        assert!(!p.ask_yes_no("Overwrite?", Some(false)).unwrap());

        // Empty answer without a default re-prompts
        let mut p = prompter("\nno\n");
        assert!(!p.ask_yes_no("Attended?", None).unwrap());
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("s"), Some(true));
        assert_eq!(parse_yes_no("SI"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("true"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("15"), Some(15.0));
        assert_eq!(parse_number(" 12.75 "), Some(12.75));
        assert_eq!(parse_number("9,5"), Some(9.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("twelve"), None);
    }
}
