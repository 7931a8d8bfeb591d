pub mod cli;
pub mod constants;
mod file;
mod flowgraph;
mod modulator;
#[cfg(feature = "plot")]
mod plot;
pub mod reference;
mod sample;
mod sink;
mod source;

pub use file::{load_config, RunConfig};
pub use flowgraph::{run_phase_modulator, Flowgraph};
pub use modulator::PhaseModulator;
pub use num_complex::Complex32;
pub use sample::{modulated_samples, ModulatedSample};
pub use sink::VectorSink;
pub use source::VectorSource;

// returns the sink samples for a phase modulator run over every input, one chunk per work call
pub fn modulate_chunked(
    input: Vec<f32>,
    sensitivity: f32,
    chunk_size: usize,
) -> Result<Vec<Complex32>, Box<dyn std::error::Error>> {
    let mut flowgraph = Flowgraph::new(
        VectorSource::new(input),
        PhaseModulator::new(sensitivity),
        VectorSink::new(),
    )
    .with_chunk_size(chunk_size);
    flowgraph.run()?;
    Ok(flowgraph.into_sink().into_data())
}
