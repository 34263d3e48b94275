// Label-specific metadata extraction
mod lexicon;
pub mod ner;
pub mod patterns;

use crate::dataset::{INVOICE, PAPER, RESUME};
use ner::EntityRecognizer;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

const RESUME_NER_CHARS: usize = 3000;
const PAPER_HEADER_LINES: usize = 5;

/// Ordered field name -> optional value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    fields: Vec<(String, Option<String>)>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        self.insert(key, value.map(Into::into));
        self
    }

    /// Replaces an existing value in place, otherwise appends.
    pub fn insert(&mut self, key: &str, value: Option<String>) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    /// `None` if the field is missing, `Some(None)` if present but absent.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Characters a mapping literal shows as escapes rather than raw
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || (c.is_whitespace() && c != ' ')
        || matches!(c, '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2060}'..='\u{2064}' | '\u{feff}')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{}", quote)?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if is_unprintable(c) => match c as u32 {
                n @ 0..=0xff => write!(f, "\\x{:02x}", n)?,
                n @ 0x100..=0xffff => write!(f, "\\u{:04x}", n)?,
                n => write!(f, "\\U{:08x}", n)?,
            },
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

/// Renders as `{'key': 'value', 'other': None}`; this is the stored `meta` text.
impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_quoted(f, key)?;
            write!(f, ": ")?;
            match value {
                Some(v) => write_quoted(f, v)?,
                None => write!(f, "None")?,
            }
        }
        write!(f, "}}")
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

pub type ExtractFn = fn(&dyn EntityRecognizer, &str) -> MetadataRecord;

/// Which rule set applies to a predicted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    Invoice,
    Paper,
    Unknown,
}

impl DocumentKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            RESUME => Self::Resume,
            INVOICE => Self::Invoice,
            PAPER => Self::Paper,
            _ => Self::Unknown,
        }
    }

    pub fn rule(self) -> Option<ExtractFn> {
        match self {
            Self::Resume => Some(extract_resume as ExtractFn),
            Self::Invoice => Some(extract_invoice as ExtractFn),
            Self::Paper => Some(extract_paper as ExtractFn),
            Self::Unknown => None,
        }
    }
}

fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn extract_resume(ner: &dyn EntityRecognizer, text: &str) -> MetadataRecord {
    let name = ner.persons(char_prefix(text, RESUME_NER_CHARS)).into_iter().next();
    MetadataRecord::new()
        .with("name", name)
        .with("email", patterns::first_email(text))
        .with("phone", patterns::first_phone(text))
}

pub fn extract_invoice(_ner: &dyn EntityRecognizer, text: &str) -> MetadataRecord {
    MetadataRecord::new().with("total", patterns::first_money(text))
}

pub fn extract_paper(ner: &dyn EntityRecognizer, text: &str) -> MetadataRecord {
    let header: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(PAPER_HEADER_LINES)
        .collect();
    let title = header.first().copied();
    // Lines stay separate so a title never merges into an author name
    let authors = ner.persons(&header.join("\n")).join(", ");

    MetadataRecord::new()
        .with("title", title)
        .with("authors", Some(authors))
}

/// Applies the rule for a label; holds the recognizer built at startup.
pub struct MetadataExtractor<'a> {
    recognizer: &'a dyn EntityRecognizer,
}

impl<'a> MetadataExtractor<'a> {
    pub fn new(recognizer: &'a dyn EntityRecognizer) -> Self {
        Self { recognizer }
    }

    /// Unknown labels produce an empty record.
    pub fn extract(&self, label: &str, text: &str) -> MetadataRecord {
        match DocumentKind::from_label(label).rule() {
            Some(rule) => rule(self.recognizer, text),
            None => MetadataRecord::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ner::{Entity, EntityKind, HeuristicRecognizer};
    use super::*;

    /// Tags every line that starts with "Name:" as a person.
    struct StubRecognizer;

    impl EntityRecognizer for StubRecognizer {
        fn entities(&self, text: &str) -> Vec<Entity> {
            let mut offset = 0;
            let mut out = Vec::new();
            for line in text.split('\n') {
                if let Some(rest) = line.strip_prefix("Name: ") {
                    let start = offset + "Name: ".len();
                    out.push(Entity {
                        text: rest.to_string(),
                        kind: EntityKind::Person,
                        start,
                        end: start + rest.len(),
                    });
                }
                offset += line.len() + 1;
            }
            out
        }
    }

    #[test]
    fn resume_fields() {
        let text = "Name: Jane Doe\nEmail jane.doe@example.com\nPhone +1 555 123 4567";
        let record = MetadataExtractor::new(&StubRecognizer).extract("resume", text);
        assert_eq!(record.value("name"), Some("Jane Doe"));
        assert_eq!(record.value("email"), Some("jane.doe@example.com"));
        assert_eq!(record.value("phone"), Some("+1 555 123 4567"));
    }

    #[test]
    fn resume_name_only_from_the_first_3000_chars() {
        let text = format!("{}\nName: Late Person", "x".repeat(3000));
        let record = MetadataExtractor::new(&StubRecognizer).extract("resume", &text);
        assert_eq!(record.get("name"), Some(None));
    }

    #[test]
    fn empty_text_gives_absent_fields() {
        let extractor = MetadataExtractor::new(&StubRecognizer);
        let resume = extractor.extract("resume", "");
        assert_eq!(resume.to_string(), "{'name': None, 'email': None, 'phone': None}");
        assert_eq!(extractor.extract("invoice", "").to_string(), "{'total': None}");
        assert_eq!(extractor.extract("paper", "").to_string(), "{'title': None, 'authors': ''}");
    }

    #[test]
    fn invoice_total() {
        let record =
            MetadataExtractor::new(&StubRecognizer).extract("invoice", "Total due: $123.45 today");
        assert_eq!(record.value("total"), Some("$123.45"));
    }

    #[test]
    fn paper_title_is_first_non_blank_line() {
        let text = "\n\nIntro to Widgets\nBy A. Smith\n\nAbstract...\n";
        let recognizer = HeuristicRecognizer::new();
        let record = MetadataExtractor::new(&recognizer).extract("paper", text);
        assert_eq!(record.value("title"), Some("Intro to Widgets"));
        assert_eq!(record.value("authors"), Some("A. Smith"));
    }

    #[test]
    fn paper_authors_only_from_first_five_lines() {
        let text = "Title\nName: Ada\nName: Alan\nl4\nl5\nName: Late";
        let record = MetadataExtractor::new(&StubRecognizer).extract("paper", text);
        assert_eq!(record.value("authors"), Some("Ada, Alan"));
    }

    #[test]
    fn unknown_label_is_empty() {
        let record = MetadataExtractor::new(&StubRecognizer).extract("memo", "Total $5");
        assert!(record.is_empty());
        assert_eq!(record.to_string(), "{}");
    }

    #[test]
    fn extraction_is_pure() {
        let recognizer = HeuristicRecognizer::new();
        let extractor = MetadataExtractor::new(&recognizer);
        let text = "Jane Doe\njane@example.org\n+1 555 000 1111";
        assert_eq!(extractor.extract("resume", text), extractor.extract("resume", text));
    }

    #[test]
    fn display_quotes_like_a_mapping_literal() {
        let record = MetadataRecord::new()
            .with("title", Some("O'Reilly notes"))
            .with("authors", Some("a\\b"));
        assert_eq!(record.to_string(), "{'title': \"O'Reilly notes\", 'authors': 'a\\\\b'}");
    }

    #[test]
    fn unprintable_characters_are_escaped() {
        let record = MetadataRecord::new()
            .with("title", Some("Page\x0cBreak"))
            .with("authors", Some("zero\u{200b}width caf\u{e9}"))
            .with("notes", Some("nbsp\u{a0}end\u{2028}"));
        assert_eq!(
            record.to_string(),
            "{'title': 'Page\\x0cBreak', 'authors': 'zero\\u200bwidth caf\u{e9}', \
             'notes': 'nbsp\\xa0end\\u2028'}"
        );
    }

    #[test]
    fn paper_with_form_feed_in_title() {
        let recognizer = HeuristicRecognizer::new();
        let text = "Widget Survey\x0c\nBy A. Smith\n";
        let meta = MetadataExtractor::new(&recognizer).extract("paper", text);
        assert_eq!(meta.to_string(), "{'title': 'Widget Survey\\x0c', 'authors': 'A. Smith'}");
    }

    #[test]
    fn resume_name_skips_headline_lines() {
        let recognizer = HeuristicRecognizer::new();
        let text = "CURRICULUM VITAE\nSenior Software Engineer\nJane Doe\njane@x.io\n";
        let record = MetadataExtractor::new(&recognizer).extract("resume", text);
        assert_eq!(record.value("name"), Some("Jane Doe"));
        assert_eq!(record.value("email"), Some("jane@x.io"));
    }

    #[test]
    fn paper_authors_from_a_real_header() {
        let recognizer = HeuristicRecognizer::new();
        let text = "Deep Residual Learning for Image Recognition\n\
                    Kaiming He, Xiangyu Zhang, Shaoqing Ren, Jian Sun\n\
                    Microsoft Research\n";
        let record = MetadataExtractor::new(&recognizer).extract("paper", text);
        assert_eq!(
            record.value("title"),
            Some("Deep Residual Learning for Image Recognition")
        );
        assert_eq!(
            record.value("authors"),
            Some("Kaiming He, Xiangyu Zhang, Shaoqing Ren, Jian Sun")
        );
    }

    #[test]
    fn serializes_in_field_order() {
        let record = MetadataRecord::new().with("b", Some("1")).with("a", None::<String>);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"b":"1","a":null}"#);
    }
}
