//! Breed label table and the display strings built from it.
//!
//! Index order matches the model's output vector and must never be reordered
//! independently of the model.

/// Breeds the bundled classifier distinguishes.
pub static DOG_BREEDS: [&str; 10] = [
    "Shiba Inu",
    "Akita",
    "Toy Poodle",
    "Chihuahua",
    "Pomeranian",
    "Miniature Dachshund",
    "Shih Tzu",
    "French Bulldog",
    "Labrador Retriever",
    "Golden Retriever",
];

/// Shown when no breed clears the confidence threshold.
pub static UNRECOGNIZED_TEXT: &str = "Could not tell the breed of this dog.";

/// Render the recognized-breed display string.
pub fn recognized_text(breed: &str) -> String {
    format!("This dog looks like a {breed}!")
}
