use num_complex::Complex32;

// collects every complex sample written to it, in order
#[derive(Clone, Debug, Default)]
pub struct VectorSink {
    data: Vec<Complex32>,
}

impl VectorSink {
    pub fn new() -> VectorSink {
        VectorSink { data: Vec::new() }
    }

    pub fn write(&mut self, samples: &[Complex32]) {
        self.data.extend_from_slice(samples);
    }

    pub fn data(&self) -> &[Complex32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Complex32> {
        self.data
    }

    pub fn reset(&mut self) {
        self.data.clear();
    }
}
