// a finite source of real samples, handed out a chunk at a time
#[derive(Clone, Debug, Default)]
pub struct VectorSource {
    data: Vec<f32>,
    position: usize, // index of the next sample to hand out
}

impl VectorSource {
    pub fn new(data: Vec<f32>) -> VectorSource {
        VectorSource { data, position: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns up to `max` samples, an empty slice once exhausted.
    pub fn read(&mut self, max: usize) -> &[f32] {
        let start = self.position;
        let end = start.saturating_add(max).min(self.data.len());
        self.position = end;
        &self.data[start..end]
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_chunks_until_exhausted() {
        let mut source = VectorSource::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(source.len(), 5);
        assert_eq!(source.read(2), &[1.0, 2.0]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.read(2), &[3.0, 4.0]);
        assert_eq!(source.read(2), &[5.0]);
        assert!(source.read(2).is_empty());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn read_everything_after_partial_read() {
        let mut source = VectorSource::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(source.read(1), &[1.0]);
        assert_eq!(source.read(usize::MAX), &[2.0, 3.0]);
        assert!(source.read(usize::MAX).is_empty());
    }

    #[test]
    fn rewind() {
        let mut source = VectorSource::new(vec![0.25, -0.25]);
        source.read(10);
        source.rewind();
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.read(1), &[0.25]);
    }

    #[test]
    fn empty() {
        let mut source = VectorSource::default();
        assert!(source.is_empty());
        assert!(source.read(4).is_empty());
    }
}
