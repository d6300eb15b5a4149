use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, x: u32, y: u32) -> Result<Self::Success, Self::Failure>;
}
