pub mod yaml_parser;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{BananaError, BananaResult};

/// Delimiter recognized by the default parser
pub const YAML_DELIMITER: &str = "---";

/// How the text between two delimiters is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    Yaml,
}

impl FrontMatterFormat {
    pub fn decode(self, raw: &str) -> Result<FrontMatter, String> {
        match self {
            FrontMatterFormat::Yaml => yaml_parser::parse_yaml(raw).map_err(|e| e.to_string()),
        }
    }
}

/// A content file split into metadata and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedContent {
    pub front_matter: FrontMatter,
    pub body: String,
    /// Delimiter of the front matter block, if the file had one
    pub delimiter: Option<String>,
}

/// Splits content files into front matter and body
///
/// The delimiter table is fixed at construction. A first line that is not a
/// known delimiter means the whole file is body.
#[derive(Debug, Clone)]
pub struct ContentParser {
    formats: HashMap<String, FrontMatterFormat>,
}

impl Default for ContentParser {
    fn default() -> Self {
        Self::with_formats([(YAML_DELIMITER.to_string(), FrontMatterFormat::Yaml)])
    }
}

impl ContentParser {
    pub fn with_formats<I>(formats: I) -> Self
    where
        I: IntoIterator<Item = (String, FrontMatterFormat)>,
    {
        ContentParser {
            formats: formats.into_iter().collect(),
        }
    }

    pub fn format_for(&self, delimiter: &str) -> Option<FrontMatterFormat> {
        self.formats.get(delimiter).copied()
    }

    /// Open and parse a file from disk
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> BananaResult<ParsedContent> {
        let path = path.as_ref();
        debug!("Parsing {}", path.display());

        let file = File::open(path)
            .map_err(|e| BananaError::parse(path, format!("cannot open file: {}", e)))?;
        self.parse_reader(path, BufReader::new(file))
    }

    /// Parse a byte stream; `path` is only used in error messages
    pub fn parse_reader<R: BufRead>(&self, path: &Path, mut reader: R) -> BananaResult<ParsedContent> {
        let read_err = |e: std::io::Error| BananaError::parse(path, format!("read failed: {}", e));

        let mut first = Vec::new();
        reader.read_until(b'\n', &mut first).map_err(read_err)?;

        let delimiter = std::str::from_utf8(trim_line_ending(&first))
            .ok()
            .and_then(|line| self.format_for(line).map(|format| (line.to_string(), format)));

        let Some((delimiter, format)) = delimiter else {
            // No front matter: the first line belongs to the body
            let mut body = first;
            reader.read_to_end(&mut body).map_err(read_err)?;
            return Ok(ParsedContent {
                front_matter: FrontMatter::default(),
                body: into_utf8(path, body)?,
                delimiter: None,
            });
        };

        let mut block = Vec::new();
        loop {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line).map_err(read_err)? == 0 {
                return Err(BananaError::parse(
                    path,
                    format!("unterminated front matter: no closing '{}'", delimiter),
                ));
            }

            if trim_line_ending(&line) == delimiter.as_bytes() {
                break;
            }

            block.extend_from_slice(&line);
        }

        let block = into_utf8(path, block)?;
        let front_matter = format
            .decode(&block)
            .map_err(|e| BananaError::parse(path, format!("malformed front matter: {}", e)))?;

        let mut body = Vec::new();
        reader.read_to_end(&mut body).map_err(read_err)?;

        Ok(ParsedContent {
            front_matter,
            body: into_utf8(path, body)?,
            delimiter: Some(delimiter),
        })
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && matches!(line[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &line[..end]
}

fn into_utf8(path: &Path, bytes: Vec<u8>) -> BananaResult<String> {
    String::from_utf8(bytes).map_err(|e| BananaError::parse(path, format!("not valid UTF-8: {}", e)))
}
