// ============================================================
// Layer 4 — Text Cleaner
// ============================================================
// Turns a raw posting into a lowercase, space-tokenised string.
//
// This is the classic sentence-classification cleaning recipe:
// an ordered list of regex substitutions where every step sees
// the output of the previous one.
//
// Cleaning steps (applied in order):
//   1. Replace everything outside the allow-list with a space
//      allow-list: A-Z a-z 0-9 ( ) , . ! ? ' `
//   2. Split contraction suffixes off their word:
//      it's → it 's    don't → do n't    we'll → we 'll
//   3. Pad punctuation with spaces so it becomes its own token
//   4. Collapse runs of whitespace into one space
//   5. Trim and lowercase
//
// Contraction rules are ASCII case-insensitive so that "IT'S"
// and "it's" clean to the same tokens. Without that, cleaning
// an already-cleaned string could split a suffix a second time.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use regex::Regex;

/// Compiled substitution rules, applied top to bottom.
pub struct TextCleaner {
    rules: Vec<(Regex, &'static str)>,
}

impl TextCleaner {
    /// Compile the substitution rules.
    pub fn new() -> Self {
        let table: [(&str, &'static str); 14] = [
            // ── Step 1: allow-list ───────────────────────────────────────────
            (r"[^A-Za-z0-9(),.!?'`]", " "),
            // ── Step 2: contractions ─────────────────────────────────────────
            (r"(?i)'s", " 's"),
            (r"(?i)'ve", " 've"),
            (r"(?i)n't", " n't"),
            (r"(?i)'re", " 're"),
            (r"(?i)'d", " 'd"),
            (r"(?i)'ll", " 'll"),
            // ── Step 3: punctuation ──────────────────────────────────────────
            (r",", " , "),
            (r"\.", " . "),
            (r"!", " ! "),
            (r"\(", " ( "),
            (r"\)", " ) "),
            (r"\?", " ? "),
            // ── Step 4: whitespace runs ──────────────────────────────────────
            (r"\s{2,}", " "),
        ];

        let rules = table
            .iter()
            .map(|(pattern, replacement)| (compile(pattern), *replacement))
            .collect();

        Self { rules }
    }

    /// Clean a raw text string.
    pub fn clean(&self, text: &str) -> String {
        let mut current = text.to_string();

        for (re, replacement) in &self.rules {
            current = re.replace_all(&current, *replacement).into_owned();
        }

        // ── Step 5: trim and lowercase ───────────────────────────────────────
        current.trim().to_lowercase()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// The rule table is fixed at compile time, so a bad pattern is a bug.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid cleaner pattern '{pattern}': {e}"))
}
