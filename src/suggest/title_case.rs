/// Title-case `text` word by word
///
/// The first character of every whitespace-separated word is upper-cased and
/// the rest lower-cased. Whitespace is kept exactly as typed.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}
