use std::fmt;

use num_complex::Complex32;

use crate::modulator::PhaseModulator;

// one row of a modulation report: what went in, the angle it became, and what came out
#[derive(Clone, Debug, PartialEq)]
pub struct ModulatedSample {
    pub index: usize,
    pub input: f32,
    pub phase: f32, // radians, sensitivity * input, not wrapped
    pub output: Complex32,
}

impl fmt::Display for ModulatedSample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ModulatedSample {{ index: {}, input: {}, phase: {}, output: {} }}",
            self.index, self.input, self.phase, self.output
        )
    }
}

impl ModulatedSample {
    pub fn new(index: usize, input: f32, output: Complex32, sensitivity: f32) -> ModulatedSample {
        ModulatedSample {
            index,
            input,
            phase: sensitivity * input,
            output,
        }
    }

    pub fn magnitude(&self) -> f32 {
        self.output.norm()
    }
}

// pairs each input with the sample the flowgraph produced for it
pub fn modulated_samples(
    input: &[f32],
    output: &[Complex32],
    modulator: &PhaseModulator,
) -> Vec<ModulatedSample> {
    input
        .iter()
        .zip(output)
        .enumerate()
        .map(|(index, (&x, &y))| ModulatedSample::new(index, x, y, modulator.sensitivity()))
        .collect()
}
