use burn::config::Config;
use burn::nn::{Linear, LinearConfig};
use burn::prelude::{Backend, Module};
use burn::record::{FullPrecisionSettings, NamedMpkBytesRecorder, Recorder};
use burn::tensor::Tensor;

use crate::error::LoadError;
use crate::model::{ForwardModel, InitModel};

/// Topology of a [`LinearPredictor`] artifact.
#[derive(Config, Debug)]
pub struct LinearPredictorConfig {
    pub input_size: usize,
    pub output_size: usize,
}

impl LinearPredictorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> LinearPredictor<B> {
        LinearPredictor {
            linear: LinearConfig::new(self.input_size, self.output_size).init(device),
        }
    }
}

/// A single dense layer exposing one output slot named `"output"`.
#[derive(Module, Debug)]
pub struct LinearPredictor<B: Backend> {
    linear: Linear<B>,
}

/// Serialized form of a [`LinearPredictor`]: topology plus recorded weights.
pub struct LinearPredictorArtifact {
    pub config: LinearPredictorConfig,
    pub weights: Vec<u8>,
}

impl LinearPredictorArtifact {
    /// Record a model into an artifact that [`InitModel::init`] can load back.
    pub fn from_model<B: Backend>(
        config: LinearPredictorConfig,
        model: LinearPredictor<B>,
    ) -> Result<Self, LoadError> {
        let recorder = NamedMpkBytesRecorder::<FullPrecisionSettings>::default();
        let weights = recorder.record(model.into_record(), ())?;
        Ok(Self { config, weights })
    }
}

impl<B: Backend> InitModel<B, LinearPredictorArtifact> for LinearPredictor<B> {
    fn init(args: &LinearPredictorArtifact, device: &B::Device) -> Result<Self, LoadError> {
        let model = args.config.init(device);
        let recorder = NamedMpkBytesRecorder::<FullPrecisionSettings>::default();
        let record = recorder.load(args.weights.clone(), device)?;
        Ok(model.load_record(record))
    }
}

impl<B: Backend> ForwardModel<B> for LinearPredictor<B> {
    fn input_size(&self) -> usize {
        self.linear.weight.val().dims()[0]
    }

    fn output_names(&self) -> Vec<String> {
        vec!["output".to_string()]
    }

    fn forward(&self, input: Tensor<B, 2>) -> Vec<(String, Tensor<B, 2>)> {
        vec![("output".to_string(), self.linear.forward(input))]
    }
}
