//! The measured stages and the hardware constants they are judged against.

/// Which theoretical peak a stage's achieved rate is compared to.
///
/// Every stage is tagged explicitly rather than special-casing "the last row":
/// adding or reordering stages must not silently change which peak applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakTier {
    /// Scalar FP pipeline peak.
    Scalar,
    /// Full-width vector (FMA) peak, only reached by the BLAS stage.
    Vector,
}

/// Theoretical peak throughput in GFLOPS for each tier.
#[derive(Debug, Clone, Copy)]
pub struct Peaks {
    pub scalar: f64,
    pub vector: f64,
}

impl Peaks {
    /// Peak applicable to a given tier.
    pub fn for_tier(&self, tier: PeakTier) -> f64 {
        match tier {
            PeakTier::Scalar => self.scalar,
            PeakTier::Vector => self.vector,
        }
    }
}

/// One optimization stage: a name, one measured wall-clock time, and the
/// peak tier it runs against. Order in the table is meaningful — each stage
/// builds on the previous one.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub seconds: f64,
    pub tier: PeakTier,
}

impl Stage {
    pub const fn new(name: &'static str, seconds: f64, tier: PeakTier) -> Self {
        Stage { name, seconds, tier }
    }
}

/// Problem size all stages were measured at.
pub const N: usize = 256;

/// Peaks for the machine the exercise ran on: 51.2 GFLOPS scalar,
/// 204.8 GFLOPS with full-width FMA units.
pub const PEAKS: Peaks = Peaks { scalar: 51.2, vector: 204.8 };

/// The six measured stages, in optimization order.
///
/// Times are transcribed from separate runs: the Python baseline from the
/// `time-naive` analog, the rest from natively built variants. Only the MKL
/// stage uses the vector units, so only it is held to the vector peak.
pub const STAGES: [Stage; 6] = [
    Stage::new("Python", 10.8641939163208, PeakTier::Scalar),
    Stage::new("C/C++", 0.055, PeakTier::Scalar),
    Stage::new("Loop reorder", 0.033, PeakTier::Scalar),
    Stage::new("Compiler opt", 0.003, PeakTier::Scalar),
    Stage::new("Loop unroll", 0.005, PeakTier::Scalar),
    Stage::new("Intel MKL", 0.002, PeakTier::Vector),
];
