// Lightweight named-entity recognition for person names
use super::lexicon;
use crate::classifier::stopwords::is_stopword;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Organization,
}

/// A tagged span; `start..end` are byte offsets into the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
    pub start: usize,
    pub end: usize,
}

/// Anything that can tag entities in text, in document order.
pub trait EntityRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity>;

    fn persons(&self, text: &str) -> Vec<String> {
        self.entities(text)
            .into_iter()
            .filter(|e| e.kind == EntityKind::Person)
            .map(|e| e.text)
            .collect()
    }
}

const HONORIFICS: &[&str] = &[
    "dr.", "mr.", "mrs.", "ms.", "prof.", "dr", "mr", "mrs", "ms", "prof",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "llc", "ltd", "corp", "co", "company", "corporation", "gmbh", "university", "institute",
    "college", "laboratory", "labs", "group", "foundation",
];

/// A capitalized word that may belong to a name.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NameWord {
    all_caps: bool,
    /// Known given name; counts as evidence when it leads a run.
    given: bool,
    /// Everyday title or job vocabulary.
    common: bool,
    /// Function word such as "He" or "Will"; only valid as a surname.
    stopword: bool,
}

impl NameWord {
    fn plain(&self) -> bool {
        !self.common && !self.stopword
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Name(NameWord),
    Initial,
    Honorific,
    OrgSuffix,
    Other,
}

fn classify(word: &str) -> Token {
    let lower = word.to_lowercase();
    if HONORIFICS.contains(&lower.as_str()) {
        return Token::Honorific;
    }

    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Token::Other,
    };
    if !first.is_uppercase() {
        return Token::Other;
    }
    if word.len() == first.len_utf8() + 1 && word.ends_with('.') {
        return Token::Initial;
    }

    let bare = lower.trim_end_matches('.');
    if ORG_SUFFIXES.contains(&bare) {
        return Token::OrgSuffix;
    }
    if bare.chars().count() < 2 || lexicon::is_non_name(bare) {
        return Token::Other;
    }
    if !word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'') {
        return Token::Other;
    }

    let given = lexicon::is_given_name(bare);
    Token::Name(NameWord {
        all_caps: word.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase()),
        given,
        common: !given && lexicon::is_common_word(bare),
        stopword: !given && is_stopword(bare),
    })
}

/// True for lines like "Alice Johnson, Bob Lee and Carol King".
fn is_name_list(line: &str) -> bool {
    let normalized = line.replace(" and ", ",").replace(" & ", ",");
    let segments: Vec<&str> = normalized
        .split(|c: char| c == ',' || c == ';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    segments.len() >= 2
        && segments.iter().all(|segment| {
            let words: Vec<&str> = segment.split_whitespace().collect();
            (2..=4).contains(&words.len())
                && words
                    .iter()
                    .all(|w| w.chars().next().map_or(false, char::is_uppercase))
        })
}

/// One whitespace-delimited word with trailing punctuation split off.
struct Word<'a> {
    text: &'a str,
    start: usize,
    /// Trailing `,;:` or a sentence-ending period closes the current run.
    closes_run: bool,
}

fn is_honorific(word: &str) -> bool {
    HONORIFICS.contains(&word.to_lowercase().as_str())
}

fn words(line: &str, offset: usize) -> Vec<Word<'_>> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                let raw = &line[s..i];
                let raw = raw.trim_start_matches(|c: char| "([\"'".contains(c));
                let s = i - raw.len();
                let trimmed = raw.trim_end_matches(|c: char| ",;:)]\"'!?".contains(c));
                let mut closes_run = trimmed.len() != raw.len();
                let mut text = trimmed;
                // Keep initials ("A.") and honorifics ("Dr."), drop sentence periods
                if text.ends_with('.') && text.chars().count() > 2 && !is_honorific(text) {
                    text = text.trim_end_matches('.');
                    closes_run = true;
                }
                if !text.is_empty() {
                    out.push(Word { text, start: offset + s, closes_run });
                }
                start = None;
            }
            _ => {}
        }
    }
    out
}

type Run<'r, 'w> = Vec<(Token, &'r Word<'w>)>;

/// Per-line run state while scanning words left to right.
struct LineScan<'s> {
    source: &'s str,
    name_list: bool,
    honorific: bool,
}

impl LineScan<'_> {
    /// Something beyond capitalization says this run is a name.
    fn has_evidence(&self, run: &[(Token, &Word<'_>)]) -> bool {
        if self.honorific {
            return true;
        }
        match run.first().map(|(t, _)| *t) {
            Some(Token::Initial) => true,
            Some(Token::Name(n)) => n.given || (self.name_list && n.plain()),
            _ => false,
        }
    }

    fn accept(&self, run: &[(Token, &Word<'_>)]) -> Option<Entity> {
        let (first, last) = (run.first()?, run.last()?);
        let names: Vec<NameWord> = run
            .iter()
            .filter_map(|(t, _)| match t {
                Token::Name(n) => Some(*n),
                _ => None,
            })
            .collect();
        if names.is_empty() {
            return None;
        }
        if !self.honorific && !(2..=4).contains(&run.len()) {
            return None;
        }
        // Mixed all-caps and title-case runs are usually headings bleeding into names
        if names.iter().any(|n| n.all_caps) && names.iter().any(|n| !n.all_caps) {
            return None;
        }

        let kind = if last.0 == Token::OrgSuffix {
            EntityKind::Organization
        } else if self.has_evidence(run) || names.iter().all(NameWord::plain) {
            EntityKind::Person
        } else {
            return None;
        };

        let start = first.1.start;
        let end = last.1.start + last.1.text.len();
        let text = self.source[start..end].to_string();
        Some(Entity { text, kind, start, end })
    }

    fn flush(&mut self, run: &mut Run<'_, '_>, out: &mut Vec<Entity>) {
        if let Some(e) = self.accept(run) {
            out.push(e);
        }
        run.clear();
        self.honorific = false;
    }
}

/// Rule-based recognizer for capitalized name runs.
///
/// A person needs evidence beyond capitalization: a leading given name or
/// initial, an honorific, or a line that reads as a list of names. Runs made
/// only of unremarkable capitalized words are accepted too, so unknown names
/// like "Grace Hopper" still match, while "Graph Neural Networks" does not.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut offset = 0;

        for line in text.split('\n') {
            let words = words(line, offset);
            offset += line.len() + 1;

            let mut scan = LineScan {
                source: text,
                name_list: is_name_list(line),
                honorific: false,
            };
            let mut run: Run<'_, '_> = Vec::new();

            for word in &words {
                let token = classify(word.text);
                match token {
                    Token::Honorific => {
                        scan.flush(&mut run, &mut entities);
                        scan.honorific = !word.closes_run;
                        continue;
                    }
                    // "He" in "Kaiming He" ends a name; on its own it is a pronoun
                    Token::Name(n) if n.stopword => {
                        if !run.is_empty() && scan.has_evidence(&run) {
                            run.push((token, word));
                        }
                        scan.flush(&mut run, &mut entities);
                        continue;
                    }
                    Token::Name(_) | Token::Initial => run.push((token, word)),
                    Token::OrgSuffix if !run.is_empty() => {
                        run.push((token, word));
                        scan.flush(&mut run, &mut entities);
                        continue;
                    }
                    Token::OrgSuffix | Token::Other => {
                        scan.flush(&mut run, &mut entities);
                        continue;
                    }
                }

                if word.closes_run || run.len() == 4 {
                    scan.flush(&mut run, &mut entities);
                }
            }
            scan.flush(&mut run, &mut entities);
        }
        entities
    }
}
