/// Reverses a string, character by character
///
/// Characters are Unicode scalar values: combining sequences are not kept
/// together.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
