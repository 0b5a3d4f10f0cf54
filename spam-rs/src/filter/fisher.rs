//! Fisher's method for combining word probabilities
//!
//! Each word contributes a spam probability `p`. Fisher's statistic
//! `-2 ln(∏ p)` follows a chi-square distribution with `2n` degrees of
//! freedom when the `p` are uniform, so the upper-tail probability of that
//! statistic measures how unlikely the observed probabilities are. The same
//! test is run on `p` (ham evidence) and on `1 - p` (spam evidence) and the
//! two results are folded into one score.

/// Upper-tail probability of a chi-square variable with `df` degrees of
/// freedom exceeding `chi`, for even `df`
///
/// Sums the truncated series `Σ e^{-m} m^i / i!` for `i < df / 2`, with
/// `m = chi / 2`. Terms are accumulated in log space so a large `m` does
/// not underflow `e^{-m}` to zero before the series catches up. The result
/// is clamped to 1. With `df < 4` only the first term is used, so
/// `inverse_chi_square(0.0, 0) == 1.0`.
pub fn inverse_chi_square(chi: f64, df: usize) -> f64 {
    let m = chi / 2.0;
    let mut log_term = -m;
    let mut sum = log_term.exp();

    for i in 1..df / 2 {
        log_term += (m / i as f64).ln();
        sum += log_term.exp();
    }

    sum.min(1.0)
}

/// Natural log of the product of `probs`
///
/// Uses the plain product while it stays a normal float and falls back to
/// a sum of logarithms once it underflows.
fn ln_product(probs: &[f64]) -> f64 {
    let product: f64 = probs.iter().product();
    if product >= f64::MIN_POSITIVE {
        product.ln()
    } else {
        probs.iter().map(|p| p.ln()).sum()
    }
}

/// Fisher's combined probability for a set of independent probabilities
pub fn fisher(probs: &[f64]) -> f64 {
    inverse_chi_square(-2.0 * ln_product(probs), 2 * probs.len())
}

/// Combined score for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentScore {
    /// Final score in [0, 1]; higher is more spam-like
    pub score: f64,
    pub spam_indicator: f64,
    pub ham_indicator: f64,
}

/// Folds per-word spam probabilities into a document score
#[derive(Debug, Clone, Copy)]
pub struct FisherCombiner {
    probability_floor: f64,
}

const DEFAULT_PROBABILITY_FLOOR: f64 = 1e-6;

impl FisherCombiner {
    /// A floor outside (0, 0.5) leaves an empty clamp range and falls back
    /// to the default of 1e-6.
    pub fn new(probability_floor: f64) -> Self {
        let probability_floor = if probability_floor > 0.0 && probability_floor < 0.5 {
            probability_floor
        } else {
            DEFAULT_PROBABILITY_FLOOR
        };
        Self { probability_floor }
    }

    /// Combine per-word spam probabilities
    ///
    /// Probabilities are clamped to `[floor, 1 - floor]` first so neither
    /// product can reach zero. An empty slice scores a neutral 0.5.
    pub fn combine(&self, spam_probs: &[f64]) -> DocumentScore {
        let floor = self.probability_floor;
        let spam_probs: Vec<f64> = spam_probs
            .iter()
            .map(|p| p.clamp(floor, 1.0 - floor))
            .collect();
        let ham_probs: Vec<f64> = spam_probs.iter().map(|p| 1.0 - p).collect();

        let ham_indicator = 1.0 - fisher(&spam_probs);
        let spam_indicator = 1.0 - fisher(&ham_probs);

        DocumentScore {
            score: (1.0 + spam_indicator - ham_indicator) / 2.0,
            spam_indicator,
            ham_indicator,
        }
    }
}

impl Default for FisherCombiner {
    fn default() -> Self {
        Self::new(DEFAULT_PROBABILITY_FLOOR)
    }
}
