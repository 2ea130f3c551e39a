use crate::core::table::{DigitTable, PhoneticTable};
use crate::core::types::{is_devanagari_consonant, HALANTA};
use std::sync::Arc;

/// Latin to Devanagari converter over an immutable phonetic table.
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: Arc<PhoneticTable>,
    digits: DigitTable,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator {
    /// A converter over the shared standard table.
    pub fn new() -> Self {
        Self::with_table(PhoneticTable::shared())
    }

    pub fn with_table(table: Arc<PhoneticTable>) -> Self {
        Self { table, digits: DigitTable::STANDARD }
    }

    pub fn table(&self) -> &PhoneticTable {
        &self.table
    }

    pub fn digits(&self) -> &DigitTable {
        &self.digits
    }

    /// Transliterates a full roman string.
    ///
    /// Segments are separated by single spaces and converted independently,
    /// so runs of spaces survive untouched. Characters that match nothing
    /// are copied through.
    pub fn transliterate(&self, roman: &str) -> String {
        let converted: Vec<String> = roman.split(' ').map(|word| self.transliterate_word(word)).collect();
        converted.join(" ")
    }

    /// The space-key action: convert the trimmed buffer and leave the cursor
    /// after a single trailing space.
    pub fn commit_word(&self, buffer: &str) -> String {
        let mut out = self.transliterate(buffer.trim());
        out.push(' ');
        out
    }

    fn transliterate_word(&self, word: &str) -> String {
        let mut result = String::with_capacity(word.len() * 3);
        let mut cursor = 0;
        let mut tail_from_table = false;

        while let Some(c) = word[cursor..].chars().next() {
            if let Some(d) = self.digits.to_devanagari(c) {
                result.push(d);
                cursor += c.len_utf8();
                tail_from_table = false;
            } else if let Some((len, entry)) = self.table.longest_match(&word[cursor..]) {
                result.push_str(&entry.value);
                cursor += len;
                tail_from_table = true;
            } else {
                // Tabs and newlines end a word just like the split on ' '.
                if tail_from_table && c.is_whitespace() {
                    restore_inherent_vowel(&mut result);
                }
                result.push(c);
                cursor += c.len_utf8();
                tail_from_table = false;
            }
        }

        if tail_from_table {
            restore_inherent_vowel(&mut result);
        }
        result
    }
}

/// Drops a word-final virama after a consonant, so the consonant keeps its
/// inherent "a": "सुगम्" becomes "सुगम".
fn restore_inherent_vowel(word: &mut String) {
    let mut tail = word.chars().rev();
    if let (Some(HALANTA), Some(c)) = (tail.next(), tail.next()) {
        if is_devanagari_consonant(c) {
            word.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(input: &str) -> String {
        Transliterator::new().transliterate(input)
    }

    #[test]
    fn test_basic_syllables() {
        assert_eq!(t("ka"), "क");
        assert_eq!(t("kaa"), "का");
        assert_eq!(t("kee"), "की");
        assert_eq!(t("kha"), "ख");
        assert_eq!(t("chha"), "छ");
    }

    #[test]
    fn test_words() {
        assert_eq!(t("namaste"), "नमस्ते");
        assert_eq!(t("nepaal"), "नेपाल");
        assert_eq!(t("kaam"), "काम");
        assert_eq!(t("ghar"), "घर");
    }

    #[test]
    fn test_inherent_vowel_restored_only_at_word_end() {
        assert_eq!(t("ram"), "रम");
        assert_eq!(t("ram ram"), "रम रम");
        assert_eq!(t("sugam"), "सुगम");
        // Inside a word the half form stays.
        assert_eq!(t("bistaar"), "बिस्तार");
    }

    #[test]
    fn test_tab_and_newline_end_a_word() {
        assert_eq!(t("ram\tram"), "रम\tरम");
        assert_eq!(t("ram\n"), "रम\n");
        assert_eq!(t("sugam\r\nghar"), "सुगम\r\nघर");
        // Typed Devanagari before a tab is left alone.
        assert_eq!(t("क्\t"), "क्\t");
    }

    #[test]
    fn test_case_selects_retroflex() {
        assert_eq!(t("Ta"), "ट");
        assert_eq!(t("ta"), "त");
        assert_eq!(t("Daal"), "डाल");
        assert_eq!(t("daal"), "दाल");
    }

    #[test]
    fn test_digits_take_priority() {
        assert_eq!(t("2080"), "२०८०");
        assert_eq!(t("ka1"), "क१");
    }

    #[test]
    fn test_multiple_spaces_round_trip() {
        assert_eq!(t("ka  kha"), "क  ख");
        assert_eq!(t(" ka "), " क ");
        assert_eq!(t(""), "");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(t("ho."), "हो।");
        assert_eq!(t("ho?"), "हो?");
    }

    #[test]
    fn test_unmatched_passthrough() {
        assert_eq!(t("x@z"), "x@z");
        assert_eq!(t("नमस्ते"), "नमस्ते");
        // An existing word-final virama is not the tokenizer's to remove.
        assert_eq!(t("क्"), "क्");
    }

    #[test]
    fn test_conjuncts() {
        assert_eq!(t("ksha"), "क्ष");
        assert_eq!(t("gya"), "ज्ञ");
        assert_eq!(t("tra"), "त्र");
        assert_eq!(t("om"), "ॐ");
    }

    #[test]
    fn test_commit_word() {
        let tr = Transliterator::new();
        assert_eq!(tr.commit_word("  ram "), "रम ");
        assert_eq!(tr.commit_word(""), " ");
    }

    #[test]
    fn test_restore_inherent_vowel_requires_consonant() {
        let mut s = String::from("अ्");
        restore_inherent_vowel(&mut s);
        assert_eq!(s, "अ्");
        let mut s = String::from("ष्");
        restore_inherent_vowel(&mut s);
        assert_eq!(s, "ष");
    }
}
