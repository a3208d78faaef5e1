//! Seam to the on-device inference engine.

use burn::tensor::{backend::Backend, Tensor};

use crate::error::Result;

/// Tensor shapes an engine was configured with at registration time.
///
/// A tensor handed to the engine must match `input` exactly; a mismatch is a
/// configuration error, not a runtime input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeContract {
    /// Model input shape, `[batch, height, width, channels]`.
    pub input: [usize; 4],
    /// Model output shape, `[batch, classes]`.
    pub output: [usize; 2],
}

impl ShapeContract {
    /// Contract for a single-image RGB classifier.
    pub fn rgb_classifier(height: usize, width: usize, num_classes: usize) -> Self {
        Self {
            input: [1, height, width, 3],
            output: [1, num_classes],
        }
    }

    /// Number of classes in the output vector.
    pub fn num_classes(&self) -> usize {
        self.output[1]
    }
}

/// A registered model, seen by the pipeline as a black box mapping one
/// normalized image tensor to one score vector.
///
/// `run` completes exactly once per invocation, with either the scores or a
/// failure.
pub trait InferenceEngine<B: Backend> {
    /// The shape contract the engine was registered with.
    fn contract(&self) -> ShapeContract;

    /// Run the model over a `[1, height, width, 3]` input, producing raw
    /// class scores of shape `[1, classes]`.
    fn run(&self, input: Tensor<B, 4>) -> Result<Tensor<B, 2>>;
}
