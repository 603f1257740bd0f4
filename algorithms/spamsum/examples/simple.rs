//! Spamsum Basic Example
//!
//! Minimal usage: `let sig = spamsum::hash(&data)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), spamsum::SpamsumError> {
    let original = "ahoj světe, ".repeat(400);
    let edited = original.replacen("světe", "vesmíre", 3);

    let a = spamsum::hash(original.as_bytes())?;
    let b = spamsum::hash(edited.as_bytes())?;

    println!("Original: {a}");
    println!("Edited:   {b}");
    println!("Score:    {}", spamsum::compare(&a, &b)?);
    Ok(())
}
