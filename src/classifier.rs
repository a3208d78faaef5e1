//! The classification pipeline: photo in, verdict out.

use std::path::Path;

use burn::{
    config::Config,
    tensor::{backend::Backend, Device},
};
use log::{error, info};

use crate::engine::InferenceEngine;
use crate::error::{self, ClassifierError};
use crate::preprocess;
use crate::verdict::{self, Verdict};

/// Settings for the classification pipeline.
#[derive(Config, Debug)]
pub struct ClassifierConfig {
    /// Identifier of the registered model.
    pub model: String,
    /// Model input height in pixels.
    #[config(default = 224)]
    pub height: usize,
    /// Model input width in pixels.
    #[config(default = 224)]
    pub width: usize,
    /// Minimum top score for a breed to be reported as recognized.
    #[config(default = "0.9")]
    pub confidence_threshold: f64,
}

/// Dog breed classifier over a registered inference engine.
///
/// Each classification request is self-contained: the pipeline holds no
/// per-request state, so requests cannot interfere with one another.
#[derive(Debug)]
pub struct DogBreedClassifier<B: Backend, E: InferenceEngine<B>> {
    config: ClassifierConfig,
    engine: E,
    labels: &'static [&'static str],
    device: Device<B>,
}

impl<B: Backend, E: InferenceEngine<B>> DogBreedClassifier<B, E> {
    /// Register the engine and label table with the pipeline.
    ///
    /// Fails fast when the engine's shape contract disagrees with the
    /// configured input size or the label table, or when the threshold is
    /// outside `[0, 1]`. A failure here means classification is unavailable
    /// for the session; it is never deferred to request time.
    pub fn new(
        config: ClassifierConfig,
        engine: E,
        labels: &'static [&'static str],
        device: Device<B>,
    ) -> error::Result<Self> {
        let contract = engine.contract();

        if config.height == 0 || config.width == 0 {
            return Err(ClassifierError::InputDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let expected = [1, config.height, config.width, 3];
        if contract.input != expected {
            return Err(ClassifierError::ShapeContract {
                expected,
                got: contract.input,
            });
        }
        if contract.num_classes() != labels.len() {
            return Err(ClassifierError::LabelTable {
                scores: contract.num_classes(),
                labels: labels.len(),
            });
        }
        if !(0.0..=1.0).contains(&config.confidence_threshold) {
            return Err(ClassifierError::ThresholdRange(config.confidence_threshold));
        }

        info!(
            "registered model {} for {}x{} input over {} breeds",
            config.model,
            config.width,
            config.height,
            labels.len()
        );

        Ok(Self {
            config,
            engine,
            labels,
            device,
        })
    }

    /// Classify one encoded photo.
    ///
    /// Reads the orientation tag (falling back to upright when unreadable),
    /// decodes and normalizes the photo, runs the engine and selects the
    /// verdict. Decode and inference failures are logged and returned; there
    /// is no retry.
    pub fn classify(&self, encoded: &[u8]) -> error::Result<Verdict> {
        let orientation = preprocess::read_orientation(encoded);
        let image = preprocess::decode_image(encoded).map_err(|err| {
            error!("could not decode source image: {err}");
            err
        })?;

        let input = preprocess::normalize::<B>(
            &image,
            orientation,
            self.config.width,
            self.config.height,
            &self.device,
        );

        let output = self.engine.run(input).map_err(|err| {
            error!("inference failed: {err}");
            err
        })?;

        let data = output.into_data().convert::<f32>();
        let scores = data
            .as_slice::<f32>()
            .map_err(|err| ClassifierError::Inference(format!("{err:?}")))?;

        verdict::select_verdict(scores, self.labels, self.config.confidence_threshold as f32)
    }

    /// Classify a photo on disk.
    ///
    /// The caller owns the file; a camera temp file is still the caller's to
    /// clean up afterwards.
    pub fn classify_path<P: AsRef<Path>>(&self, path: P) -> error::Result<Verdict> {
        let encoded = std::fs::read(path)?;
        self.classify(&encoded)
    }

    /// The configuration the pipeline was registered with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
