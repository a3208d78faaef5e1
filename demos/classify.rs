use burn::{
    backend::NdArray,
    nn::{Linear, LinearConfig},
    tensor::{activation::softmax, backend::Backend, Tensor},
};

use dogbreed_burn::{
    labels, ClassifierConfig, DogBreedClassifier, InferenceEngine, Result, ShapeContract, Verdict,
};

/// Stand-in for the bundled breed model: mean-pools the photo to its three
/// channel intensities and projects them through a randomly initialized
/// linear head. Swap in a real engine to get real predictions.
struct DemoEngine<B: Backend> {
    head: Linear<B>,
    contract: ShapeContract,
}

impl<B: Backend> DemoEngine<B> {
    fn new(height: usize, width: usize, device: &B::Device) -> Self {
        Self {
            head: LinearConfig::new(3, labels::DOG_BREEDS.len()).init(device),
            contract: ShapeContract::rgb_classifier(height, width, labels::DOG_BREEDS.len()),
        }
    }
}

impl<B: Backend> InferenceEngine<B> for DemoEngine<B> {
    fn contract(&self) -> ShapeContract {
        self.contract
    }

    fn run(&self, input: Tensor<B, 4>) -> Result<Tensor<B, 2>> {
        // [1, H, W, 3] -> [1, 3]
        let features = input.mean_dim(1).mean_dim(2).reshape([1, 3]);
        Ok(softmax(self.head.forward(features), 1))
    }
}

pub fn main() {
    env_logger::init();

    // Parse arguments
    let img_path = std::env::args().nth(1).expect("No image path provided");

    let device = Default::default();
    let config = ClassifierConfig::new("dog_breed_classifier".to_string());
    let engine = DemoEngine::<NdArray>::new(config.height, config.width, &device);

    let classifier = DogBreedClassifier::new(config, engine, &labels::DOG_BREEDS, device)
        .map_err(|err| format!("Failed to register the model.\nError: {err}"))
        .unwrap();

    let verdict = classifier
        .classify_path(&img_path)
        .map_err(|err| format!("Failed to classify {img_path}.\nError: {err}"))
        .unwrap();

    println!("{}", verdict.display_text());
    if let Verdict::Recognized { breed, score } = verdict {
        println!("Breed: {breed}\nScore: {score:.4}");
    }
}
