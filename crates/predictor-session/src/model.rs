use burn::prelude::Backend;
use burn::tensor::Tensor;

use crate::error::LoadError;

/// A loaded network ready to run forward passes.
///
/// Outputs are named slots returned in declaration order; the session decides
/// which slot to read (see [`crate::OutputSelection`]).
pub trait ForwardModel<B: Backend>: Send + 'static {
    /// Expected input dimensionality (the flat length of one input row).
    fn input_size(&self) -> usize;

    /// Declared output slot names, in declaration order.
    fn output_names(&self) -> Vec<String>;

    /// Run one forward pass, producing every declared output.
    fn forward(&self, input: Tensor<B, 2>) -> Vec<(String, Tensor<B, 2>)>;
}

/// Models constructible from an opaque artifact on a given device.
pub trait InitModel<B: Backend, Args = ()>: Sized {
    fn init(args: &Args, device: &B::Device) -> Result<Self, LoadError>;
}
