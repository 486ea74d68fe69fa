//! Loads a randomly initialized linear model from a recorded artifact and
//! runs a few predict calls, logging the presented text blocks.

use burn::backend::NdArray;
use burn::prelude::Backend;
use predictor_session::{
    LinearPredictor, LinearPredictorArtifact, LinearPredictorConfig, LogSink, PredictorSession,
    SeededSource, SessionConfig,
};

type B = NdArray;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let device = <B as Backend>::Device::default();
    let config = LinearPredictorConfig::new(10, 10);
    let model = config.init::<B>(&device);
    let artifact = LinearPredictorArtifact::from_model(config, model)?;

    let mut session: PredictorSession<B, LinearPredictor<B>, LogSink> =
        PredictorSession::new(SessionConfig::new(), LogSink, device)
            .with_random_source(Box::new(SeededSource::new(42)));
    session.initialize_from(&artifact)?;

    for _ in 0..3 {
        session.predict()?;
    }
    session.release();
    Ok(())
}
