//! Sentence and chunk splitting for streaming TTS.
//!
//! Verbalized text is handed to synthesis in pieces; these helpers cut at
//! sentence and phrase boundaries so each piece sounds natural on its
//! own. Lengths are counted in characters, not bytes — inputs are
//! CJK-heavy and multi-byte throughout.

const SENTENCE_DELIMITERS: &[char] = &['。', '！', '？', '.', '!', '?', ';', '；'];
const PHRASE_DELIMITERS: &[char] = &['，', ',', '、', '·'];

/// Default maximum chunk length for [`split_for_streaming`].
pub const DEFAULT_MAX_CHUNK_LEN: usize = 100;

/// A chunk must hold at least this many characters before a phrase
/// delimiter is allowed to end it.
const MIN_PHRASE_CHUNK_CHARS: usize = 20;

/// Split text at sentence-ending punctuation (both CJK and ASCII).
/// Delimiters stay attached to their sentence; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if SENTENCE_DELIMITERS.contains(&c) {
            push_trimmed(&mut sentences, &current);
            current.clear();
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

/// Cut text into chunks of at most `max_len` characters: always at
/// sentence delimiters, at phrase delimiters once a chunk has enough
/// content, and by raw length as a last resort.
pub fn split_for_streaming(text: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;
    for c in text.chars() {
        current.push(c);
        current_chars += 1;

        let boundary = current_chars >= max_len
            || SENTENCE_DELIMITERS.contains(&c)
            || (PHRASE_DELIMITERS.contains(&c) && current_chars > MIN_PHRASE_CHUNK_CHARS);
        if boundary {
            push_trimmed(&mut chunks, &current);
            current.clear();
            current_chars = 0;
        }
    }
    push_trimmed(&mut chunks, &current);
    chunks
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
