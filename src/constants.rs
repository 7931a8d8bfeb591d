/// Samples moved per work call when a flowgraph does not say otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Decimal places the modulator output must agree with the reference to.
pub const DEFAULT_PLACES: u32 = 5;
