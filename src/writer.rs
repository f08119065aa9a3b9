use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{
    console::Console,
    deindent::deindent,
    error::{Error, Result},
    format::CodeFormatter,
};

/// Text encodings supported when persisting text content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Latin1,
}

impl Encoding {
    /// Encodes `text`, failing on characters the encoding cannot represent.
    pub fn encode(&self, text: &str) -> std::result::Result<Vec<u8>, String> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Utf16Le => {
                Ok(text.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect())
            }
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c))
                        .map_err(|_| format!("character {c:?} is outside latin1"))
                })
                .collect(),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Latin1 => "latin1",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" => Ok(Encoding::Utf16Le),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            other => Err(Error::Other(anyhow::anyhow!("Unsupported encoding '{other}'"))),
        }
    }
}

/// Content of a file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

/// Processing applied to text content before it is persisted.
///
/// `format` takes precedence over `deindent`. Both are ignored for binary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Encoding used for text content. Defaults to UTF-8.
    pub encoding: Encoding,
    /// Run the content through the code formatter. Defaults to `false`.
    pub format: bool,
    /// Strip the template indentation. Defaults to `true`.
    pub deindent: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { encoding: Encoding::Utf8, format: false, deindent: true }
    }
}

/// One file to materialize on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub path: PathBuf,
    pub content: FileContent,
    pub options: WriteOptions,
}

impl WriteRequest {
    pub fn text<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Text(content.into()),
            options: WriteOptions::default(),
        }
    }

    pub fn binary<P: Into<PathBuf>>(path: P, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Binary(content),
            options: WriteOptions::default(),
        }
    }

    /// Sets whether the content goes through the code formatter.
    pub fn formatted(mut self, format: bool) -> Self {
        self.options.format = format;
        self
    }

    /// Disables de-indentation.
    pub fn verbatim(mut self) -> Self {
        self.options.deindent = false;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.options.encoding = encoding;
        self
    }
}

/// Writes files below a base directory, formatting or de-indenting text first.
pub struct FileWriter<'a> {
    base_dir: PathBuf,
    formatter: &'a dyn CodeFormatter,
    console: Console,
}

impl<'a> FileWriter<'a> {
    pub fn new<P: Into<PathBuf>>(
        base_dir: P,
        formatter: &'a dyn CodeFormatter,
        console: Console,
    ) -> Self {
        Self { base_dir: base_dir.into(), formatter, console }
    }

    /// Resolves `path` against the base directory unless it is absolute.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Writes a single request.
    ///
    /// Text content is formatted (when requested) or de-indented, trimmed and
    /// terminated by exactly one newline. Binary content is written as is.
    pub fn write(&self, request: &WriteRequest) -> Result<()> {
        self.console.log("Writing", &request.path.display().to_string());
        let target = self.resolve(&request.path);

        let bytes = match &request.content {
            FileContent::Binary(bytes) => {
                log::debug!("Writing {} raw bytes to {}", bytes.len(), target.display());
                return std::fs::write(&target, bytes).map_err(Error::from);
            }
            FileContent::Text(text) => {
                let text = self.prepare_text(text, &target, &request.options)?;
                request.options.encoding.encode(&text).map_err(|reason| {
                    Error::EncodingError {
                        path: request.path.display().to_string(),
                        encoding: request.options.encoding.to_string(),
                        reason,
                    }
                })?
            }
        };

        log::debug!("Writing {} bytes to {}", bytes.len(), target.display());
        std::fs::write(&target, bytes).map_err(Error::from)
    }

    fn prepare_text(&self, text: &str, path: &Path, options: &WriteOptions) -> Result<String> {
        let text = if options.format {
            self.formatter.format(text, path)?
        } else if options.deindent {
            deindent(text)
        } else {
            text.to_string()
        };
        Ok(format!("{}\n", text.trim()))
    }

    /// Serializes `value` as indented JSON and writes it without further processing.
    pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(
        &self,
        path: P,
        value: &T,
    ) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        self.write(&WriteRequest::text(path.as_ref(), contents).verbatim())
    }

    /// Reads and parses a JSON file.
    pub fn read_json<P: AsRef<Path>>(&self, path: P) -> Result<serde_json::Value> {
        let contents = std::fs::read_to_string(self.resolve(path))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Creates a single directory. The parent must already exist.
    pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.console.log("Creating", &format!("{}/", path.display()));
        std::fs::create_dir(self.resolve(path)).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Upper-cases the source and remembers which paths it saw.
    #[derive(Default)]
    struct UppercaseFormatter {
        seen: RefCell<Vec<PathBuf>>,
    }

    impl CodeFormatter for UppercaseFormatter {
        fn format(&self, source: &str, path: &Path) -> Result<String> {
            self.seen.borrow_mut().push(path.to_path_buf());
            Ok(source.to_uppercase())
        }
    }

    struct RejectingFormatter;

    impl CodeFormatter for RejectingFormatter {
        fn format(&self, _source: &str, path: &Path) -> Result<String> {
            Err(Error::FormatError {
                path: path.display().to_string(),
                message: "SyntaxError: Unexpected token".into(),
            })
        }
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    #[test]
    fn deindents_text_by_default() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let request =
            WriteRequest::text("index.html", "\n  <div>\n    <span>x</span>\n  </div>\n");
        writer.write(&request).unwrap();

        assert_eq!(read(&dir, "index.html"), "<div>\n  <span>x</span>\n</div>\n");
        assert!(formatter.seen.borrow().is_empty());
    }

    #[test]
    fn first_line_content_is_only_trimmed() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let request =
            WriteRequest::text("index.html", "  <div>\n    <span>x</span>\n  </div>");
        writer.write(&request).unwrap();

        assert_eq!(read(&dir, "index.html"), "<div>\n    <span>x</span>\n  </div>\n");
    }

    #[test]
    fn format_takes_precedence_over_deindent() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let request = WriteRequest::text("a.js", "\n    let a;\n      b;\n").formatted(true);
        assert!(request.options.deindent);
        writer.write(&request).unwrap();

        assert_eq!(read(&dir, "a.js"), "LET A;\n      B;\n");
        assert_eq!(*formatter.seen.borrow(), vec![dir.path().join("a.js")]);
    }

    #[test]
    fn verbatim_keeps_indentation() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        writer.write(&WriteRequest::text("a.txt", "\n  a\n    b").verbatim()).unwrap();
        assert_eq!(read(&dir, "a.txt"), "a\n    b\n");
    }

    #[test]
    fn ends_with_exactly_one_newline() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        writer.write(&WriteRequest::text("a.txt", "content\n\n \t\n")).unwrap();
        assert_eq!(read(&dir, "a.txt"), "content\n");

        writer.write(&WriteRequest::text("b.txt", "")).unwrap();
        assert_eq!(read(&dir, "b.txt"), "\n");
    }

    #[test]
    fn binary_content_ignores_text_options() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let bytes = vec![0x89, b'P', b'N', b'G', b' ', b'\n', 0x00];
        let request = WriteRequest::binary("logo.png", bytes.clone())
            .formatted(true)
            .encoding(Encoding::Latin1);
        writer.write(&request).unwrap();

        assert_eq!(fs::read(dir.path().join("logo.png")).unwrap(), bytes);
        assert!(formatter.seen.borrow().is_empty());
    }

    #[test]
    fn formatter_errors_propagate_and_nothing_is_written() {
        let dir = TempDir::new().unwrap();
        let writer = FileWriter::new(dir.path(), &RejectingFormatter, Console::silent());

        let err = writer
            .write(&WriteRequest::text("broken.tsx", "const = ;").formatted(true))
            .unwrap_err();
        assert!(matches!(err, Error::FormatError { .. }));
        assert!(!dir.path().join("broken.tsx").exists());
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let err = writer.write(&WriteRequest::text("src/index.tsx", "x")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn encodes_utf16le() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        writer.write(&WriteRequest::text("a.txt", "hé").encoding(Encoding::Utf16Le)).unwrap();
        assert_eq!(
            fs::read(dir.path().join("a.txt")).unwrap(),
            vec![b'h', 0x00, 0xE9, 0x00, b'\n', 0x00]
        );
    }

    #[test]
    fn latin1_rejects_wide_characters() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        writer.write(&WriteRequest::text("ok.txt", "café").encoding(Encoding::Latin1)).unwrap();
        assert_eq!(fs::read(dir.path().join("ok.txt")).unwrap(), b"caf\xE9\n".to_vec());

        let err = writer
            .write(&WriteRequest::text("bad.txt", "€").encoding(Encoding::Latin1))
            .unwrap_err();
        assert!(matches!(err, Error::EncodingError { .. }));
    }

    #[test]
    fn parses_encoding_names() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf16le".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert_eq!("binary".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn json_round_trips() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        let value = serde_json::json!({
            "compilerOptions": { "jsx": "react", "sourceMap": true },
            "include": ["src"],
            "nested": { "deep": [1, 2, { "x": null }] },
        });
        writer.write_json("tsconfig.json", &value).unwrap();

        assert_eq!(writer.read_json("tsconfig.json").unwrap(), value);
        let raw = read(&dir, "tsconfig.json");
        assert!(raw.starts_with("{\n  \"compilerOptions\": {\n    \"jsx\""));
        assert!(raw.ends_with("}\n"));
        assert!(formatter.seen.borrow().is_empty());
    }

    #[test]
    fn absolute_paths_bypass_base_dir() {
        let base = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(base.path(), &formatter, Console::silent());

        let target = other.path().join("abs.txt");
        writer.write(&WriteRequest::text(&target, "x")).unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "x\n");
    }

    #[test]
    fn create_dir_resolves_against_base() {
        let dir = TempDir::new().unwrap();
        let formatter = UppercaseFormatter::default();
        let writer = FileWriter::new(dir.path(), &formatter, Console::silent());

        writer.create_dir("src").unwrap();
        assert!(dir.path().join("src").is_dir());
        assert!(writer.create_dir("src").is_err());
    }
}
