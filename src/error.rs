//! Error types for the classification pipeline.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ClassifierError>;

/// Everything that can go wrong between receiving a photo and producing a
/// verdict.
///
/// Decode and inference failures are per-request; the shape, label-table and
/// threshold variants are configuration errors surfaced at startup or on the
/// first misuse, never silently degraded.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The source image could not be decoded. Terminal for the request.
    #[error("failed to decode source image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The photo could not be read from disk.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// Configured model input dimensions are unusable.
    #[error("model input dimensions {width}x{height} must be positive")]
    InputDimensions { width: usize, height: usize },

    /// The engine was configured for a different input shape than the
    /// pipeline produces.
    #[error("engine input contract {got:?} does not match configured shape {expected:?}")]
    ShapeContract {
        expected: [usize; 4],
        got: [usize; 4],
    },

    /// Score vector and label table lengths disagree.
    #[error("score vector has {scores} entries but label table has {labels}")]
    LabelTable { scores: usize, labels: usize },

    /// The engine produced no scores at all.
    #[error("empty score vector")]
    EmptyScoreVector,

    /// Confidence threshold outside `[0, 1]`.
    #[error("confidence threshold {0} is outside [0, 1]")]
    ThresholdRange(f64),

    /// The engine reported failure for this run.
    #[error("inference failed: {0}")]
    Inference(String),
}
