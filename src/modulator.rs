use num_complex::Complex32;

// the phase modulator block, float in, complex out
// each output sample sits on the unit circle at angle sensitivity * input,
// there is no running phase, so samples never depend on their neighbours
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseModulator {
    sensitivity: f32, // radians per unit input amplitude
}

impl Default for PhaseModulator {
    fn default() -> Self {
        Self { sensitivity: 1.0 }
    }
}

impl PhaseModulator {
    pub fn new(sensitivity: f32) -> PhaseModulator {
        PhaseModulator { sensitivity }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Maps one real sample to `cos(s*x) + i*sin(s*x)`.
    ///
    /// The phase is formed and evaluated in double precision and only the
    /// result is narrowed, so large `s*x` keeps its accuracy.
    /// Non-finite input is not rejected, NaN comes straight out the other side.
    pub fn modulate_sample(&self, sample: f32) -> Complex32 {
        let phase = self.sensitivity as f64 * sample as f64;
        let (sin, cos) = phase.sin_cos();
        Complex32::new(cos as f32, sin as f32)
    }

    /// Processes as many samples as both buffers allow and returns that count.
    pub fn work(&self, input: &[f32], output: &mut [Complex32]) -> usize {
        let n = input.len().min(output.len());
        for (out, &x) in output[..n].iter_mut().zip(&input[..n]) {
            *out = self.modulate_sample(x);
        }
        n
    }

    pub fn modulate(&self, input: &[f32]) -> Vec<Complex32> {
        input.iter().map(|&x| self.modulate_sample(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn default() {
        let modulator = PhaseModulator::default();
        assert_eq!(modulator.sensitivity(), 1.0);
    }

    #[test]
    fn set_sensitivity() {
        let mut modulator = PhaseModulator::new(2.0);
        assert_eq!(modulator.sensitivity(), 2.0);
        modulator.set_sensitivity(PI / 4.0);
        assert_eq!(modulator.sensitivity(), PI / 4.0);
    }

    #[test]
    fn quarter_turn() {
        let modulator = PhaseModulator::new(PI / 2.0);
        let output = modulator.modulate_sample(1.0);
        assert!(output.re.abs() < 1e-6);
        assert!((output.im - 1.0).abs() < 1e-6);
    }

    #[test]
    fn half_turn_negative_input() {
        let modulator = PhaseModulator::new(PI);
        let output = modulator.modulate_sample(-1.0);
        assert!((output.re + 1.0).abs() < 1e-6);
        assert!(output.im.abs() < 1e-6);
    }

    #[test]
    fn zero_sensitivity_is_identity_rotation() {
        let modulator = PhaseModulator::new(0.0);
        let output = modulator.modulate(&[0.25, -3.0, 100.0]);
        for sample in output {
            assert_eq!(sample, Complex32::new(1.0, 0.0));
        }
    }

    #[test]
    fn empty_input() {
        let modulator = PhaseModulator::new(PI / 4.0);
        assert!(modulator.modulate(&[]).is_empty());
    }

    #[test]
    fn nan_propagates() {
        let modulator = PhaseModulator::new(PI / 4.0);
        let output = modulator.modulate_sample(f32::NAN);
        assert!(output.re.is_nan());
        assert!(output.im.is_nan());
    }

    #[test]
    fn work_is_bounded_by_shorter_buffer() {
        let modulator = PhaseModulator::new(PI / 4.0);
        let input = [0.25, 0.5, 0.25, -0.25];
        let mut output = [Complex32::new(0.0, 0.0); 3];
        let produced = modulator.work(&input, &mut output);
        assert_eq!(produced, 3);
        assert_eq!(output[1], modulator.modulate_sample(0.5));

        let mut output = [Complex32::new(0.0, 0.0); 8];
        let produced = modulator.work(&input, &mut output);
        assert_eq!(produced, 4);
        assert_eq!(output[4], Complex32::new(0.0, 0.0));
    }

    #[test]
    fn large_phase_stays_accurate() {
        let sensitivity = PI / 4.0;
        let modulator = PhaseModulator::new(sensitivity);
        for x in [900.0f32, -1000.0, 12345.5] {
            let phase = sensitivity as f64 * x as f64;
            let output = modulator.modulate_sample(x);
            assert!((output.re as f64 - phase.cos()).abs() < 1e-6, "x = {x}");
            assert!((output.im as f64 - phase.sin()).abs() < 1e-6, "x = {x}");
        }
    }

    #[test]
    fn memoryless_across_calls() {
        let modulator = PhaseModulator::new(PI / 4.0);
        let first = modulator.modulate(&[0.5, 0.5]);
        let second = modulator.modulate(&[0.5]);
        assert_eq!(first[0], first[1]);
        assert_eq!(first[1], second[0]);
    }
}
