//! Path selection
//!
//! `PathPicker` stands in for open/save dialogs. `ArgsPicker` answers from
//! command-line arguments and falls back to a terminal prompt for anything
//! that was not supplied. `Ok(None)` means the user dismissed the prompt.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Path that routes the report to stdout instead of a file
pub const STDOUT_PATH: &str = "-";

/// Extension filter shown with a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(description: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            description: description.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Case-insensitive extension check
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// `*.pdf, *.txt` style listing for prompts and errors
    pub fn patterns(&self) -> String {
        self.extensions
            .iter()
            .map(|e| format!("*.{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Chooses the document to open and the file to save to
pub trait PathPicker {
    fn pick_open(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>>;
    fn pick_save(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>>;
}

/// Asks for paths on a line-oriented terminal
pub struct PromptPicker<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, title: &str, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        write!(
            self.writer,
            "{} [{} ({})]: ",
            title,
            filter.description,
            filter.patterns()
        )?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(answer)))
    }
}

impl PromptPicker<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr so stdout stays free for reports
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PathPicker for PromptPicker<R, W> {
    fn pick_open(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        self.ask("Open", filter)
    }

    fn pick_save(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        self.ask("Export", filter)
    }
}

/// Uses paths given up front and prompts only for missing ones
pub struct ArgsPicker<P> {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    fallback: P,
}

impl<P: PathPicker> ArgsPicker<P> {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>, fallback: P) -> Self {
        Self {
            input,
            output,
            fallback,
        }
    }
}

impl<P: PathPicker> PathPicker for ArgsPicker<P> {
    fn pick_open(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        match self.input.take() {
            Some(path) => Ok(Some(path)),
            None => self.fallback.pick_open(filter),
        }
    }

    fn pick_save(&mut self, filter: &FileFilter) -> io::Result<Option<PathBuf>> {
        match self.output.take() {
            Some(path) => Ok(Some(path)),
            None => self.fallback.pick_save(filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pdf_filter() -> FileFilter {
        FileFilter::new("PDF file", &["pdf"])
    }

    #[test]
    fn test_filter_accepts_case_insensitive() {
        let filter = FileFilter::new("Documents", &["pdf", "txt"]);
        assert!(filter.accepts(Path::new("paper.PDF")));
        assert!(filter.accepts(Path::new("dir/notes.txt")));
        assert!(!filter.accepts(Path::new("image.png")));
        assert!(!filter.accepts(Path::new("README")));
        assert_eq!(filter.patterns(), "*.pdf, *.txt");
    }

    #[test]
    fn test_prompt_reads_trimmed_answer() {
        let mut output = Vec::new();
        let mut picker = PromptPicker::new(Cursor::new("  paper.pdf \n"), &mut output);

        let path = picker.pick_open(&pdf_filter()).unwrap();
        assert_eq!(path, Some(PathBuf::from("paper.pdf")));

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "Open [PDF file (*.pdf)]: ");
    }

    #[test]
    fn test_prompt_empty_answer_cancels() {
        let mut picker = PromptPicker::new(Cursor::new("\n"), Vec::new());
        assert_eq!(picker.pick_open(&pdf_filter()).unwrap(), None);
    }

    #[test]
    fn test_prompt_eof_cancels() {
        let mut picker = PromptPicker::new(Cursor::new(""), Vec::new());
        assert_eq!(picker.pick_save(&pdf_filter()).unwrap(), None);
    }

    #[test]
    fn test_args_picker_prefers_arguments() {
        let fallback = PromptPicker::new(Cursor::new("prompted.txt\n"), Vec::new());
        let mut picker = ArgsPicker::new(Some(PathBuf::from("given.pdf")), None, fallback);

        let filter = pdf_filter();
        assert_eq!(
            picker.pick_open(&filter).unwrap(),
            Some(PathBuf::from("given.pdf"))
        );
        assert_eq!(
            picker.pick_save(&filter).unwrap(),
            Some(PathBuf::from("prompted.txt"))
        );
    }
}
