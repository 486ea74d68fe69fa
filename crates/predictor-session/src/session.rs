use burn::prelude::Backend;
use burn::tensor::{Shape, Tensor, TensorData};

use crate::error::SessionError;
use crate::host::ModelHost;
use crate::lease::LeaseTracker;
use crate::model::{ForwardModel, InitModel};
use crate::rng::{EntropySource, RandomSource};
use crate::sink::PresentationSink;

/// How the session chooses which declared output slot to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSelection {
    /// Read the last declared output.
    Last,
    /// Read the output with this exact name.
    Named(String),
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of synthetic input values generated per predict call.
    pub input_len: usize,
    pub output: OutputSelection,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input_len: 10,
            output: OutputSelection::Last,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_len(mut self, input_len: usize) -> Self {
        self.input_len = input_len;
        self
    }

    pub fn with_output(mut self, output: OutputSelection) -> Self {
        self.output = output;
        self
    }
}

struct ActiveHost<M> {
    host: ModelHost<M>,
    output_name: String,
    input_size: usize,
}

/// Runs one synchronous inference round-trip per [`predict`] call.
///
/// The session starts uninitialized; [`initialize`] resolves the output slot
/// and spawns the worker, [`release`] joins it. Any `predict` outside the
/// initialized window fails with [`SessionError::NotInitialized`] without
/// touching the sink.
///
/// [`predict`]: PredictorSession::predict
/// [`initialize`]: PredictorSession::initialize
/// [`release`]: PredictorSession::release
pub struct PredictorSession<B: Backend, M, S> {
    config: SessionConfig,
    sink: S,
    rng: Box<dyn RandomSource>,
    device: B::Device,
    host: Option<ActiveHost<M>>,
    leases: LeaseTracker,
}

impl<B, M, S> PredictorSession<B, M, S>
where
    B: Backend,
    M: ForwardModel<B>,
    S: PresentationSink,
{
    pub fn new(config: SessionConfig, sink: S, device: B::Device) -> Self {
        Self {
            config,
            sink,
            rng: Box::new(EntropySource::new()),
            device,
            host: None,
            leases: LeaseTracker::new(),
        }
    }

    /// Substitute the entropy-seeded default with an injected source.
    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Resolve the output slot to read and spawn the inference worker.
    pub fn initialize(&mut self, model: M) -> Result<(), SessionError> {
        let names = model.output_names();
        let output_name = match &self.config.output {
            OutputSelection::Last => names.last().cloned().ok_or(SessionError::NoOutputs)?,
            OutputSelection::Named(name) => names
                .iter()
                .find(|n| *n == name)
                .cloned()
                .ok_or_else(|| SessionError::MissingOutput(name.clone()))?,
        };
        let input_size = model.input_size();
        log::debug!("session ready: input size {input_size}, reading output '{output_name}'");
        self.host = Some(ActiveHost {
            host: ModelHost::spawn(model),
            output_name,
            input_size,
        });
        Ok(())
    }

    /// Load a model from an artifact, then [`initialize`] with it.
    ///
    /// [`initialize`]: PredictorSession::initialize
    pub fn initialize_from<Args>(&mut self, args: &Args) -> Result<(), SessionError>
    where
        M: InitModel<B, Args>,
    {
        let model = M::init(args, &self.device)?;
        self.initialize(model)
    }

    /// `len` independent floats uniform in `[0, 1)`.
    pub fn generate_input(&mut self, len: usize) -> Vec<f32> {
        (0..len).map(|_| self.rng.next_unit()).collect()
    }

    /// One inference round-trip: generate input, present it, run a blocking
    /// forward pass on the worker, present the selected output, and return
    /// its values. Input and output tensors are leased and released before
    /// this returns, on every exit path.
    pub fn predict(&mut self) -> Result<Vec<f32>, SessionError> {
        let (accessor, output_name, expected) = match &self.host {
            Some(active) => (
                active.host.accessor(),
                active.output_name.clone(),
                active.input_size,
            ),
            None => return Err(SessionError::NotInitialized),
        };

        let input = self.generate_input(self.config.input_len);
        self.sink
            .present(&format_block("Input:", &input))
            .map_err(SessionError::Presentation)?;

        if input.len() != expected {
            return Err(SessionError::ShapeMismatch {
                expected,
                actual: input.len(),
            });
        }

        let input_lease = self.leases.acquire(Tensor::<B, 2>::from_data(
            TensorData::new(input, Shape::new([1, self.config.input_len])),
            &self.device,
        ));

        log::debug!("running forward pass, reading output '{output_name}'");
        let outputs = {
            let tensor = input_lease.get().clone();
            accessor.with(move |m| m.forward(tensor))
        };

        let output = outputs
            .into_iter()
            .find_map(|(name, tensor)| (name == output_name).then_some(tensor))
            .ok_or(SessionError::MissingOutput(output_name))?;
        let output_lease = self.leases.acquire(output);

        let data = output_lease.get().clone().into_data().convert::<f32>();
        let values = data
            .to_vec::<f32>()
            .map_err(|e| SessionError::Unexpected(format!("output readback failed: {e:?}")))?;

        self.sink
            .present(&format_block("Output:", &values))
            .map_err(SessionError::Presentation)?;

        // Both leases drop here (and on every early return above).
        Ok(values)
    }

    /// Join the inference worker. Idempotent; later `predict` calls fail with
    /// [`SessionError::NotInitialized`].
    pub fn release(&mut self) {
        if let Some(mut active) = self.host.take() {
            log::debug!("releasing inference worker");
            active.host.release();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.host.is_some()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Acquisition/release instrumentation for the tensors of this session.
    pub fn leases(&self) -> &LeaseTracker {
        &self.leases
    }
}

fn format_block(label: &str, values: &[f32]) -> String {
    let mut block = String::from(label);
    for value in values {
        block.push('\n');
        block.push_str(&value.to_string());
    }
    block
}
