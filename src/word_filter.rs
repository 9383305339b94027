use crate::model::{RawRecord, WordToken};
use crate::warning::{ExtractWarning, WarningCode};

enum Verdict {
    Keep,
    // Block/paragraph/line records: negative confidence and no text.
    Structural,
    Invalid,
    Blank,
    LowConfidence,
}

fn judge(text: &str, confidence: Option<i32>, min_confidence: i32) -> Verdict {
    let blank = text.trim().is_empty();
    match confidence {
        None | Some(i32::MIN..0) if blank => Verdict::Structural,
        None | Some(i32::MIN..0) => Verdict::Invalid,
        Some(_) if blank => Verdict::Blank,
        Some(conf) if conf < min_confidence => Verdict::LowConfidence,
        Some(_) => Verdict::Keep,
    }
}

#[derive(Debug, Default)]
struct Rejections {
    invalid: usize,
    blank: usize,
    low_confidence: usize,
    unplaced: usize,
}

impl Rejections {
    fn count(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Invalid => self.invalid += 1,
            Verdict::Blank => self.blank += 1,
            Verdict::LowConfidence => self.low_confidence += 1,
            Verdict::Keep | Verdict::Structural => {}
        }
    }

    fn push_warnings(&self, min_confidence: i32, warnings: &mut Vec<ExtractWarning>) {
        let reasons = [
            (self.invalid, "negative or unreadable confidence".to_string()),
            (self.blank, "blank text".to_string()),
            (
                self.low_confidence,
                format!("confidence below {min_confidence}"),
            ),
            (self.unplaced, "left/top is not an integer".to_string()),
        ];
        for (count, reason) in reasons {
            if count > 0 {
                warnings.push(ExtractWarning::new(
                    WarningCode::WordRejected,
                    format!("{count} word(s) dropped: {reason}"),
                ));
            }
        }
    }
}

/// Keeps records that carry a usable word: non-negative confidence at or above
/// `min_confidence`, non-blank text and integer left/top coordinates.
///
/// Rejections are summarized as one `WordRejected` warning per reason. Layout
/// records (negative confidence, no text) are skipped without a warning.
pub(crate) fn filter_words(
    records: &[RawRecord],
    min_confidence: i32,
    warnings: &mut Vec<ExtractWarning>,
) -> Vec<WordToken> {
    let mut rejections = Rejections::default();
    let mut words = Vec::new();

    for record in records {
        let verdict = judge(&record.text, record.confidence, min_confidence);
        rejections.count(&verdict);
        if !matches!(verdict, Verdict::Keep) {
            continue;
        }

        let (Some(left), Some(top), Some(confidence)) =
            (record.left, record.top, record.confidence)
        else {
            rejections.unplaced += 1;
            continue;
        };

        words.push(WordToken {
            text: record.text.trim().to_string(),
            left,
            top,
            height: record.height.unwrap_or(0),
            confidence,
        });
    }

    rejections.push_warnings(min_confidence, warnings);
    words
}

/// Applies the same confidence and text rules to already-positioned words.
pub(crate) fn filter_tokens(
    words: &[WordToken],
    min_confidence: i32,
    warnings: &mut Vec<ExtractWarning>,
) -> Vec<WordToken> {
    let mut rejections = Rejections::default();
    let mut kept = Vec::new();

    for word in words {
        let verdict = judge(&word.text, Some(word.confidence), min_confidence);
        rejections.count(&verdict);
        if matches!(verdict, Verdict::Keep) {
            kept.push(WordToken {
                text: word.text.trim().to_string(),
                ..word.clone()
            });
        }
    }

    rejections.push_warnings(min_confidence, warnings);
    kept
}

#[cfg(test)]
mod tests {
    use super::{filter_tokens, filter_words};
    use crate::model::{RawRecord, WordToken};
    use crate::warning::WarningCode;

    fn record(text: &str, left: Option<i32>, top: Option<i32>, confidence: i32) -> RawRecord {
        RawRecord {
            block_num: Some(1),
            line_num: Some(1),
            left,
            top,
            width: Some(20),
            height: Some(10),
            confidence: Some(confidence),
            text: text.to_string(),
        }
    }

    #[test]
    fn rejects_negative_confidence_and_blank_text() {
        let records = vec![
            record("keep", Some(0), Some(0), 90),
            record("layout", Some(0), Some(0), -1),
            record("   ", Some(0), Some(0), 95),
        ];
        let mut warnings = Vec::new();
        let words = filter_words(&records, 0, &mut warnings);

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "keep");
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code == WarningCode::WordRejected));
        assert!(warnings[0].message.contains("negative or unreadable confidence"));
        assert!(warnings[1].message.contains("blank text"));
    }

    #[test]
    fn layout_records_are_skipped_silently() {
        let records = vec![
            record("", Some(0), Some(0), -1),
            record("  ", Some(10), Some(10), -1),
            record("cell", Some(10), Some(10), 88),
        ];
        let mut warnings = Vec::new();
        let words = filter_words(&records, 0, &mut warnings);

        assert_eq!(words.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn rejects_unparsed_coordinates_with_warning() {
        let records = vec![
            record("a", None, Some(0), 90),
            record("b", Some(4), None, 90),
            record("c", Some(8), Some(0), 90),
        ];
        let mut warnings = Vec::new();
        let words = filter_words(&records, 0, &mut warnings);

        assert_eq!(words.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::WordRejected);
        assert!(warnings[0].message.starts_with("2 word(s)"));
    }

    #[test]
    fn trims_text_and_applies_min_confidence() {
        let records = vec![
            record(" total ", Some(0), Some(0), 80),
            record("noise", Some(40), Some(0), 12),
            record("ghost", Some(80), Some(0), -1),
        ];
        let mut warnings = Vec::new();
        let words = filter_words(&records, 30, &mut warnings);

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "total");
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].message.contains("confidence below 30"));
    }

    #[test]
    fn filters_positioned_tokens() {
        let words = vec![
            WordToken::new("A", 0, 0, 10, -1),
            WordToken::new(" B ", 0, 0, 10, 50),
        ];
        let mut warnings = Vec::new();
        let kept = filter_tokens(&words, 0, &mut warnings);

        assert_eq!(kept, vec![WordToken::new("B", 0, 0, 10, 50)]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::WordRejected);
    }
}
