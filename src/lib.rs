//! On-device dog breed classification pipeline.
//!
//! Takes an encoded photo (camera capture or gallery pick), corrects its
//! orientation from the embedded metadata tag, scales it to the model input
//! size and turns the model's score vector into a user-facing [`Verdict`].
//! The model itself sits behind the [`InferenceEngine`] trait: anything able
//! to map a `[1, height, width, 3]` image tensor to a `[1, classes]` score
//! vector can drive the pipeline.

pub mod classifier;
pub mod engine;
pub mod error;
pub mod labels;
pub mod preprocess;
pub mod verdict;

pub use classifier::{ClassifierConfig, DogBreedClassifier};
pub use engine::{InferenceEngine, ShapeContract};
pub use error::{ClassifierError, Result};
pub use preprocess::Orientation;
pub use verdict::Verdict;
