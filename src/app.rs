// std imports
use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, Write, stdin},
    path::PathBuf,
};

// third-party imports
use owo_colors::OwoColorize;
use serde::Serialize;

// local imports
use crate::error::*;
use wildsearch::{Pattern, Span};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    All,
    Longest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode: Mode,
    pub output_format: OutputFormat,
    pub color: bool,
}

/// Input source, either a file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Converts command line file arguments into input references, `-` stands for standard input.
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }

        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }
}

// ---

/// Searches input lines for a pattern and writes the matches.
pub struct App {
    pattern: Pattern,
    options: Options,
}

impl App {
    pub fn new(pattern: Pattern, options: Options) -> Self {
        Self { pattern, options }
    }

    /// Processes all inputs in order and returns the total number of matches written.
    pub fn run<W: Write>(&self, inputs: &[InputReference], output: &mut W) -> Result<usize> {
        let mut total = 0;
        for input in inputs {
            log::debug!("processing input {:?}", input);
            total += match input {
                InputReference::Stdin => self.process(stdin().lock(), output)?,
                InputReference::File(path) => {
                    let file = File::open(path).map_err(|source| Error::FileOpen {
                        path: path.clone(),
                        source,
                    })?;
                    self.process(BufReader::new(file), output)?
                }
            };
        }
        log::debug!("found {} matches in {} inputs", total, inputs.len());
        Ok(total)
    }

    /// Processes a single input line by line and returns the number of matches written.
    pub fn process<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0;

        for number in 1.. {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = trim_newline(&buf);

            match self.options.mode {
                Mode::All => {
                    for span in self.pattern.find_all(line) {
                        self.write(output, number, line, span)?;
                        count += 1;
                    }
                }
                Mode::Longest => {
                    if let Some(span) = self.pattern.find_longest(line) {
                        self.write(output, number, line, span)?;
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }

    fn write<W: Write>(&self, output: &mut W, line: usize, text: &[u8], span: Span) -> Result<()> {
        let matched = String::from_utf8_lossy(span.slice(text));
        match self.options.output_format {
            OutputFormat::Text => {
                if self.options.color {
                    writeln!(
                        output,
                        "{}{}{}{}{}",
                        line.green(),
                        ":".cyan(),
                        span.blue(),
                        ":".cyan(),
                        matched.red().bold()
                    )?;
                } else {
                    writeln!(output, "{}:{}:{}", line, span, matched)?;
                }
            }
            OutputFormat::Json => {
                let record = Record {
                    line,
                    start: span.start(),
                    end: span.end(),
                    text: matched,
                };
                let mut buf = json::to_vec(&record)?;
                buf.push(b'\n');
                output.write_all(&buf)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Record<'a> {
    line: usize,
    start: usize,
    end: usize,
    text: Cow<'a, str>,
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
