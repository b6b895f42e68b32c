use std::collections::HashMap;

use once_cell::sync::Lazy;

// ---------------------------------------------------------------------------
// Category content library
// ---------------------------------------------------------------------------

/// One R usage example shown in the example modal.
#[derive(Debug, Clone, Copy)]
pub struct CodeExample {
    pub title: &'static str,
    pub code: &'static str,
}

/// Icon sketch drawn next to a category header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Zig-zag trace of a random walk.
    RandomWalk,
    /// Arc bending toward the target, for adaptive proposals.
    AdaptiveArc,
    /// Satellite chains around a central mode.
    Population,
    /// Particle weight histogram.
    Particles,
    /// Closed Hamiltonian orbit.
    Orbit,
    /// Nested conditional blocks.
    Blocks,
}

/// Curated editorial content for one algorithm family.
///
/// Rendered in the per-category "About" dropdown and as the fallback body of
/// the example modal when an algorithm record carries no snippet of its own.
pub struct CategoryContent {
    /// Category key as it appears in `AlgorithmRecord::category`.
    pub key: &'static str,
    pub summary: &'static str,
    pub key_features: &'static [&'static str],
    pub best_for: &'static str,
    pub process_title: &'static str,
    /// Numbered steps as (label, text) pairs.
    pub process_steps: &'static [(&'static str, &'static str)],
    pub key_parameters: &'static str,
    pub examples: &'static [CodeExample],
    pub glyph: Glyph,
    /// Short caption under the glyph, empty when the sketch stands alone.
    pub badge: &'static str,
}

/// The six algorithm families the atlas documents.
pub static LIBRARY: [CategoryContent; 6] = [
    CategoryContent {
        key: "non-adaptive-metropolis-hastings",
        summary: "Non-adaptive Metropolis-Hastings is the foundational MCMC algorithm that uses \
                  a fixed proposal distribution to explore the target distribution.",
        key_features: &[
            "Uses a fixed proposal distribution q(θ*|θₜ)",
            "Acceptance probability based on likelihood ratio",
            "Simple to implement but may be slow to converge",
            "Requires careful tuning of proposal variance",
        ],
        best_for: "Simple posterior distributions, when you have good intuition about the target shape.",
        process_title: "Metropolis-Hastings Process",
        process_steps: &[
            ("Initialization", "Start with initial value θ₀"),
            ("Proposal", "Generate candidate θ* ~ q(θ*|θₜ)"),
            ("Acceptance", "Calculate α = min(1, π(θ*)q(θₜ|θ*)/π(θₜ)q(θ*|θₜ))"),
            ("Decision", "Accept θ* with probability α, otherwise keep θₜ"),
            ("Repeat", "Return to step 2 for next iteration"),
        ],
        key_parameters: "Proposal variance σ², acceptance rate target ~0.44",
        examples: &[
            CodeExample {
                title: "Random-walk Metropolis-Hastings",
                code: r#"# Using MCMCpack
library(MCMCpack)
result <- MCMCmetrop1R(function(x) dnorm(x, 0, 1),
                       theta.init = 0,
                       V = 1,
                       mcmc = 10000)"#,
            },
            CodeExample {
                title: "Independence Metropolis-Hastings",
                code: r#"# Using MCMCpack
result <- MCMCmetrop1R(function(x) dnorm(x, 0, 1),
                       theta.init = 0,
                       V = 1,
                       mcmc = 10000,
                       method = "IndMH")"#,
            },
        ],
        glyph: Glyph::RandomWalk,
        badge: "",
    },
    CategoryContent {
        key: "adaptive-metropolis-hastings",
        summary: "Adaptive Metropolis-Hastings automatically adjusts the proposal distribution \
                  based on the history of the chain to improve mixing.",
        key_features: &[
            "Proposal covariance adapts during sampling",
            "Targets optimal acceptance rate (~0.44 for Gaussian targets)",
            "Better exploration of complex posterior shapes",
            "Maintains theoretical guarantees under conditions",
        ],
        best_for: "Complex posterior distributions where fixed proposals are inefficient.",
        process_title: "Adaptive Metropolis Process",
        process_steps: &[
            ("Initialization", "Start with fixed proposal covariance C₀"),
            ("Adaptation", "Update Cₜ based on chain history"),
            ("Proposal", "Generate θ* ~ N(θₜ, sₜ²Cₜ)"),
            ("Acceptance", "Standard MH acceptance probability"),
            ("Update", "Modify proposal based on acceptance rate"),
            ("Convergence", "Stop adaptation when chain stabilizes"),
        ],
        key_parameters: "Adaptation rate γ, target acceptance rate, adaptation window",
        examples: &[
            CodeExample {
                title: "Adaptive Metropolis (AM)",
                code: r#"# Using MCMCpack
result <- MCMCmetrop1R(function(x) dnorm(x, 0, 1),
                       theta.init = 0,
                       V = 1,
                       mcmc = 10000,
                       adaptive = TRUE)"#,
            },
            CodeExample {
                title: "Robust Adaptive Metropolis (RAM)",
                code: r#"# Using BayesianTools
library(BayesianTools)
setup <- createBayesianSetup(likelihood = function(x) dnorm(x, 0, 1),
                            prior = createUniformPrior(-10, 10))
result <- runMCMC(setup, sampler = "AM", iterations = 10000)"#,
            },
        ],
        glyph: Glyph::AdaptiveArc,
        badge: "AM",
    },
    CategoryContent {
        key: "population-based-algorithms",
        summary: "Population-based algorithms run multiple chains simultaneously, often at \
                  different temperatures, to improve mixing and escape local modes.",
        key_features: &[
            "Multiple chains explore different regions",
            "Temperature ladder flattens the target distribution",
            "Chain swapping improves mixing",
            "Better at handling multimodal distributions",
        ],
        best_for: "Multimodal distributions, complex landscapes with many local modes.",
        process_title: "Population-based Process",
        process_steps: &[
            ("Initialization", "Create K chains at different temperatures"),
            ("Parallel Sampling", "Each chain samples independently"),
            ("Temperature Ladder", "T₁ > T₂ > ... > Tₖ = 1"),
            ("Swap Proposals", "Attempt to swap adjacent chains"),
            ("Acceptance", "Accept swaps based on temperature difference"),
            ("Output", "Use samples from T = 1 chain"),
        ],
        key_parameters: "Number of chains K, temperature schedule, swap frequency",
        examples: &[
            CodeExample {
                title: "Parallel Tempering",
                code: r#"# Using MCMCpack
result <- MCMCmetrop1R(function(x) dnorm(x, 0, 1),
                       theta.init = 0,
                       V = 1,
                       mcmc = 10000,
                       method = "PT")"#,
            },
            CodeExample {
                title: "Differential Evolution MCMC",
                code: r#"# Using BayesianTools
library(BayesianTools)
setup <- createBayesianSetup(likelihood = function(x) dnorm(x, 0, 1),
                            prior = createUniformPrior(-10, 10))
result <- runMCMC(setup, sampler = "DE", iterations = 10000)"#,
            },
        ],
        glyph: Glyph::Population,
        badge: "",
    },
    CategoryContent {
        key: "sequential-algorithms",
        summary: "Sequential algorithms (Particle Filters) are designed for dynamic systems \
                  where the target distribution evolves over time.",
        key_features: &[
            "Particles represent samples from the posterior",
            "Weights updated based on new observations",
            "Resampling prevents weight collapse",
            "Natural for time series and state space models",
        ],
        best_for: "Time series analysis, state space models, online inference.",
        process_title: "Particle Filter Process",
        process_steps: &[
            ("Initialization", "Sample particles {x₀ⁱ} from prior"),
            ("Prediction", "Propagate particles through dynamics"),
            ("Update", "Weight particles by likelihood wₜⁱ ∝ p(yₜ|xₜⁱ)"),
            ("Resampling", "Resample if effective sample size is low"),
            ("Estimation", "Compute posterior estimates"),
            ("Repeat", "Move to next time step"),
        ],
        key_parameters: "Number of particles N, resampling threshold, proposal distribution",
        examples: &[
            CodeExample {
                title: "Bootstrap Particle Filter",
                code: r#"# Using dust2
library(dust2)
# Define state space model
model <- dust2::dust_example("sir")
# Run particle filter
result <- model$run(pars = list(), n_particles = 1000)"#,
            },
            CodeExample {
                title: "Auxiliary Particle Filter",
                code: r#"# Using dust2
result <- model$run(pars = list(),
                   n_particles = 1000,
                   filter = "auxiliary")"#,
            },
        ],
        glyph: Glyph::Particles,
        badge: "PF",
    },
    CategoryContent {
        key: "hamiltonian-monte-carlo",
        summary: "Hamiltonian Monte Carlo (HMC) uses Hamiltonian dynamics to propose moves that \
                  follow the gradient of the target distribution.",
        key_features: &[
            "Uses gradient information for efficient proposals",
            "Momentum variables enable long jumps",
            "Requires gradients of the log-posterior",
            "Often much more efficient than random-walk methods",
        ],
        best_for: "High-dimensional problems, when gradients are available.",
        process_title: "HMC Process",
        process_steps: &[
            ("Momentum", "Sample p₀ ~ N(0, M)"),
            ("Dynamics", "Simulate Hamiltonian equations for L steps"),
            ("Leapfrog", "Use leapfrog integrator with step size ε"),
            ("Acceptance", "Accept (θ*, p*) with probability min(1, exp(-H(θ*, p*) + H(θ, p)))"),
            ("Discard", "Discard momentum, keep position"),
            ("Repeat", "Sample new momentum and repeat"),
        ],
        key_parameters: "Step size ε, number of steps L, mass matrix M",
        examples: &[
            CodeExample {
                title: "No-U-Turn Sampler (NUTS)",
                code: r#"# Using rstanarm
library(rstanarm)
model <- stan_glm(y ~ x, data = data,
                  family = gaussian(),
                  chains = 4, iter = 2000)"#,
            },
            CodeExample {
                title: "Riemannian Manifold HMC",
                code: r#"# Using rstanarm
model <- stan_glm(y ~ x, data = data,
                  family = gaussian(),
                  algorithm = "fullrank")"#,
            },
        ],
        glyph: Glyph::Orbit,
        badge: "HMC",
    },
    CategoryContent {
        key: "gibbs-sampler",
        summary: "Gibbs Sampling samples from the full conditional distributions of each \
                  parameter block, given all other parameters.",
        key_features: &[
            "Samples from conditional distributions directly",
            "No rejection - always accepts proposals",
            "Requires tractable conditional distributions",
            "Can be very efficient when conditionals are simple",
        ],
        best_for: "Hierarchical models, when full conditionals are available.",
        process_title: "Gibbs Sampling Process",
        process_steps: &[
            ("Partition", "Divide parameters into blocks θ = (θ₁, θ₂, ..., θₖ)"),
            ("Initialize", "Set initial values for all blocks"),
            ("Sample Block 1", "θ₁⁽ᵗ⁺¹⁾ ~ p(θ₁|θ₂⁽ᵗ⁾, ..., θₖ⁽ᵗ⁾, y)"),
            ("Sample Block 2", "θ₂⁽ᵗ⁺¹⁾ ~ p(θ₂|θ₁⁽ᵗ⁺¹⁾, θ₃⁽ᵗ⁾, ..., θₖ⁽ᵗ⁾, y)"),
            ("Continue", "Sample remaining blocks in sequence"),
            ("Repeat", "Complete one cycle, return to step 3"),
        ],
        key_parameters: "Block structure, sampling order, convergence criteria",
        examples: &[
            CodeExample {
                title: "Gibbs Sampling",
                code: r#"# Using MCMCglmm
library(MCMCglmm)
model <- MCMCglmm(y ~ x, data = data,
                  family = "gaussian",
                  nitt = 10000, burnin = 1000)"#,
            },
            CodeExample {
                title: "Block Gibbs Sampling",
                code: r#"# Using MCMCglmm
model <- MCMCglmm(y ~ x, data = data,
                  family = "gaussian",
                  nitt = 10000, burnin = 1000,
                  block = TRUE)"#,
            },
        ],
        glyph: Glyph::Blocks,
        badge: "GS",
    },
];

static BY_KEY: Lazy<HashMap<&'static str, &'static CategoryContent>> =
    Lazy::new(|| LIBRARY.iter().map(|c| (c.key, c)).collect());

/// Content for a category key, `None` for categories the library does not
/// cover yet.
pub fn category_content(key: &str) -> Option<&'static CategoryContent> {
    BY_KEY.get(key).copied()
}

// ---------------------------------------------------------------------------
// Category titles
// ---------------------------------------------------------------------------

/// Turn a kebab-case category key into a display title:
/// `"gibbs-sampler"` → `"Gibbs Sampler"`.
pub fn format_category_title(key: &str) -> String {
    key.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_capitalize_every_hyphenated_word() {
        assert_eq!(
            format_category_title("non-adaptive-metropolis-hastings"),
            "Non Adaptive Metropolis Hastings"
        );
        assert_eq!(format_category_title("gibbs-sampler"), "Gibbs Sampler");
        assert_eq!(format_category_title("hmc"), "Hmc");
        assert_eq!(format_category_title(""), "");
    }

    #[test]
    fn library_keys_are_unique_and_resolvable() {
        let mut seen = std::collections::BTreeSet::new();
        for content in &LIBRARY {
            assert!(seen.insert(content.key), "duplicate key {}", content.key);
            let found = category_content(content.key).unwrap();
            assert_eq!(found.key, content.key);
        }
        assert!(category_content("no-such-family").is_none());
    }

    #[test]
    fn every_entry_is_fully_populated() {
        for content in &LIBRARY {
            assert!(!content.summary.is_empty(), "{}", content.key);
            assert!(!content.key_features.is_empty(), "{}", content.key);
            assert!(!content.process_steps.is_empty(), "{}", content.key);
            assert!(
                content.examples.len() >= 2,
                "{} needs at least two examples",
                content.key
            );
        }
    }
}
