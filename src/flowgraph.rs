use num_complex::Complex32;
use tracing::{debug, info};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::modulator::PhaseModulator;
use crate::sink::VectorSink;
use crate::source::VectorSource;

// source -> phase modulator -> sink, run until the source is exhausted
#[derive(Clone, Debug)]
pub struct Flowgraph {
    source: VectorSource,
    modulator: PhaseModulator,
    sink: VectorSink,
    chunk_size: usize,
}

impl Flowgraph {
    pub fn new(source: VectorSource, modulator: PhaseModulator, sink: VectorSink) -> Flowgraph {
        Flowgraph {
            source,
            modulator,
            sink,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Flowgraph {
        self.chunk_size = chunk_size;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn sink(&self) -> &VectorSink {
        &self.sink
    }

    pub fn into_sink(self) -> VectorSink {
        self.sink
    }

    pub fn modulator(&self) -> &PhaseModulator {
        &self.modulator
    }

    pub fn modulator_mut(&mut self) -> &mut PhaseModulator {
        &mut self.modulator
    }

    pub fn source_mut(&mut self) -> &mut VectorSource {
        &mut self.source
    }

    /// Drains the source through the modulator into the sink.
    ///
    /// Returns the number of samples written to the sink during this run.
    pub fn run(&mut self) -> Result<usize, Box<dyn std::error::Error>> {
        if self.chunk_size == 0 {
            return Err("chunk size must be greater than zero".into());
        }

        info!(
            samples = self.source.remaining(),
            sensitivity = self.modulator.sensitivity(),
            chunk_size = self.chunk_size,
            "running flowgraph"
        );

        let mut buffer = vec![Complex32::new(0.0, 0.0); self.chunk_size];
        let mut produced = 0;
        loop {
            let input = self.source.read(self.chunk_size);
            if input.is_empty() {
                break;
            }
            let n = self.modulator.work(input, &mut buffer);
            self.sink.write(&buffer[..n]);
            produced += n;
            debug!(chunk = n, total = produced, "work call complete");
        }

        info!(produced, "flowgraph finished");
        Ok(produced)
    }
}

// builds the three block graph, runs it, and hands back what the sink saw
pub fn run_phase_modulator(samples: Vec<f32>, sensitivity: f32) -> Vec<Complex32> {
    let mut flowgraph = Flowgraph::new(
        VectorSource::new(samples),
        PhaseModulator::new(sensitivity),
        VectorSink::new(),
    );
    flowgraph.run().expect("default chunk size is non-zero");
    flowgraph.into_sink().into_data()
}
