use serde_json::{Value, json};

/// Small hand-written catalog for offline work:
/// `cargo run --bin generate_sample` writes `sample_data/{algorithms,packages}.json`,
/// then `mcmc-atlas --data-dir sample_data` browses it.
fn algorithms() -> Value {
    json!([
        {
            "id": "random-walk-metropolis",
            "name": "Random Walk Metropolis",
            "category": "non-adaptive-metropolis-hastings",
            "description": "The classic Metropolis sampler: propose a Gaussian step around the current state and accept or reject it.",
            "tags": ["metropolis", "random-walk", "foundational"],
            "packages": [
                {
                    "name": "mcmc",
                    "function": "metrop",
                    "description": "Random walk Metropolis with user-supplied log density"
                },
                {
                    "name": "MCMCpack",
                    "function": "MCMCmetrop1R",
                    "description": "Metropolis sampling from a user-written R function"
                }
            ],
            "long_description": "Random Walk Metropolis explores the target by perturbing the current state with a symmetric proposal, usually a multivariate normal centred on the current value. The proposal scale fixes the trade-off between acceptance rate and step size, and tuning it is the main practical difficulty.",
            "complexity": "low",
            "parameters": [
                {
                    "name": "proposal_sd",
                    "type": "numeric",
                    "description": "Standard deviation of the Gaussian proposal"
                },
                {
                    "name": "n_iter",
                    "type": "integer",
                    "description": "Number of iterations to run"
                }
            ],
            "pros": [
                "Simple to implement and reason about",
                "Works with any target density known up to a constant"
            ],
            "cons": [
                "Requires manual tuning of the proposal scale",
                "Mixes slowly on correlated or high-dimensional targets"
            ],
            "use_cases": [
                "Low-dimensional posteriors",
                "Teaching and prototyping"
            ],
            "example_code": "library(mcmc)\n\nlogdens <- function(theta) -0.5 * sum(theta^2)\nout <- metrop(logdens, initial = c(0, 0), nbatch = 10000, scale = 0.5)\nout$accept",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-15"
        },
        {
            "id": "independence-metropolis",
            "name": "Independence Metropolis-Hastings",
            "category": "non-adaptive-metropolis-hastings",
            "description": "Metropolis-Hastings with a fixed proposal distribution that ignores the current state.",
            "tags": ["metropolis-hastings", "independence"],
            "packages": [
                {
                    "name": "MCMCpack",
                    "function": "MCMCmetrop1R",
                    "description": "Supports independence proposals via a fixed covariance"
                }
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-15"
        },
        {
            "id": "adaptive-metropolis",
            "name": "Adaptive Metropolis",
            "category": "adaptive-metropolis-hastings",
            "description": "Metropolis sampling that continuously adapts the proposal covariance from the chain history.",
            "tags": ["adaptive", "metropolis", "haario"],
            "packages": [
                {
                    "name": "adaptMCMC",
                    "function": "MCMC",
                    "description": "Robust adaptive Metropolis after Vihola (2012)"
                }
            ],
            "long_description": "Adaptive Metropolis updates the proposal covariance with the empirical covariance of past samples, removing most manual tuning. Adaptation must decay over time for the chain to keep the correct stationary distribution.",
            "complexity": "medium",
            "parameters": [
                {
                    "name": "acc.rate",
                    "type": "numeric",
                    "description": "Target acceptance rate the scale adapts towards"
                }
            ],
            "pros": [
                "Little manual tuning",
                "Handles correlated targets well"
            ],
            "cons": [
                "Diminishing adaptation must be respected",
                "Adaptation can be slow to settle on multimodal targets"
            ],
            "use_cases": [
                "Posteriors with unknown correlation structure"
            ],
            "example_code": "library(adaptMCMC)\n\nlogdens <- function(theta) -0.5 * sum(theta^2)\nout <- MCMC(logdens, n = 10000, init = c(0, 0), acc.rate = 0.234)\nstr(out$samples)",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-03"
        },
        {
            "id": "gibbs-sampler",
            "name": "Gibbs Sampler",
            "category": "gibbs-sampler",
            "description": "Samples each parameter block from its full conditional distribution in turn.",
            "tags": ["gibbs", "conditional", "conjugate"],
            "packages": [
                {
                    "name": "MCMCglmm",
                    "function": "MCMCglmm",
                    "description": "Gibbs sampling for generalized linear mixed models"
                }
            ],
            "long_description": "Gibbs sampling cycles through the parameters, drawing each from its distribution conditional on the rest. When the full conditionals are standard distributions every draw is exact and nothing is rejected, which makes Gibbs the method of choice for conjugate hierarchical models.",
            "complexity": "medium",
            "parameters": [
                {
                    "name": "nitt",
                    "type": "integer",
                    "description": "Total number of iterations"
                },
                {
                    "name": "burnin",
                    "type": "integer",
                    "description": "Iterations discarded before storing samples"
                }
            ],
            "pros": [
                "No rejected proposals",
                "Exploits conjugate structure"
            ],
            "cons": [
                "Needs tractable full conditionals",
                "Mixes slowly when parameters are strongly correlated"
            ],
            "use_cases": [
                "Hierarchical and mixed models",
                "Missing data imputation"
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-20"
        },
        {
            "id": "block-gibbs",
            "name": "Block Gibbs Sampler",
            "category": "gibbs-sampler",
            "description": "Gibbs sampling that updates correlated parameters jointly in blocks.",
            "tags": ["gibbs", "blocking"],
            "packages": [
                {
                    "name": "MCMCglmm",
                    "function": "MCMCglmm",
                    "description": "Blocked updates for location effects"
                }
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-10"
        },
        {
            "id": "hamiltonian-monte-carlo",
            "name": "Hamiltonian Monte Carlo",
            "category": "hamiltonian-monte-carlo",
            "description": "Uses gradients and simulated Hamiltonian dynamics to propose distant, high-acceptance moves.",
            "tags": ["hmc", "gradient", "leapfrog"],
            "packages": [
                {
                    "name": "rstan",
                    "function": "stan",
                    "description": "Stan's HMC implementation with full tuning control"
                }
            ],
            "long_description": "HMC augments the parameters with momentum variables and simulates Hamiltonian dynamics with a leapfrog integrator. Proposals travel far along the typical set, so the sampler scales to hundreds of dimensions where random walks stall.",
            "complexity": "high",
            "parameters": [
                {
                    "name": "stepsize",
                    "type": "numeric",
                    "description": "Leapfrog integrator step size (epsilon)"
                },
                {
                    "name": "int_time",
                    "type": "numeric",
                    "description": "Trajectory length in simulated time"
                }
            ],
            "pros": [
                "Excellent mixing in high dimensions",
                "High acceptance rates with distant proposals"
            ],
            "cons": [
                "Requires gradients of the log density",
                "Sensitive to step size and trajectory length"
            ],
            "use_cases": [
                "High-dimensional continuous posteriors",
                "Bayesian regression and multilevel models"
            ],
            "example_code": "library(rstan)\n\nmodel <- \"\nparameters { vector[2] theta; }\nmodel { theta ~ normal(0, 1); }\n\"\nfit <- stan(model_code = model, iter = 2000, chains = 4)\nprint(fit)",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-18"
        },
        {
            "id": "nuts",
            "name": "No-U-Turn Sampler",
            "category": "hamiltonian-monte-carlo",
            "description": "HMC variant that chooses trajectory lengths automatically by stopping when the path turns back on itself.",
            "tags": ["nuts", "hmc", "stan", "adaptive"],
            "packages": [
                {
                    "name": "rstan",
                    "function": "stan",
                    "description": "Default sampler in Stan"
                }
            ],
            "long_description": "NUTS removes HMC's hand-tuned trajectory length by doubling the simulated path until it makes a U-turn, then sampling from the states visited. Combined with dual-averaging step size adaptation, it is the default sampler in Stan.",
            "complexity": "high",
            "pros": [
                "No trajectory length tuning",
                "State of the art for continuous models"
            ],
            "cons": [
                "Gradients required",
                "Tree building adds per-iteration overhead"
            ],
            "use_cases": [
                "General-purpose Bayesian inference"
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-18"
        },
        {
            "id": "parallel-tempering",
            "name": "Parallel Tempering",
            "category": "population-based-algorithms",
            "description": "Runs chains at several temperatures and swaps states so hot chains ferry the cold chain between modes.",
            "tags": ["tempering", "multimodal", "population"],
            "packages": [
                {
                    "name": "BayesianTools",
                    "function": "runMCMC",
                    "description": "Tempered and population samplers behind one interface"
                }
            ],
            "complexity": "high",
            "pros": [
                "Escapes local modes",
                "Embarrassingly parallel across temperatures"
            ],
            "cons": [
                "Temperature ladder needs design",
                "Multiplies computation per effective sample"
            ],
            "use_cases": [
                "Multimodal posteriors",
                "Mixture models"
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-15"
        },
        {
            "id": "demc",
            "name": "Differential Evolution MCMC",
            "category": "population-based-algorithms",
            "description": "Population MCMC that proposes moves along difference vectors between other chains.",
            "tags": ["differential-evolution", "population", "self-tuning"],
            "packages": [
                {
                    "name": "BayesianTools",
                    "function": "runMCMC",
                    "description": "DEzs sampler with snooker updates"
                }
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-15"
        },
        {
            "id": "pmmh",
            "name": "Particle Marginal Metropolis-Hastings",
            "category": "sequential-algorithms",
            "description": "Metropolis-Hastings whose likelihood is estimated by a particle filter, for state-space models.",
            "tags": ["particle-filter", "smc", "state-space"],
            "packages": [
                {
                    "name": "pomp",
                    "function": "pmcmc",
                    "description": "Particle MCMC for partially observed Markov processes"
                }
            ],
            "complexity": "high",
            "parameters": [
                {
                    "name": "Np",
                    "type": "integer",
                    "description": "Number of particles per filter pass"
                }
            ],
            "pros": [
                "Exact inference for intractable state-space likelihoods"
            ],
            "cons": [
                "Computationally heavy",
                "Acceptance collapses if the likelihood estimate is noisy"
            ],
            "use_cases": [
                "Epidemic and ecological state-space models"
            ],
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-03-01"
        }
    ])
}

fn packages() -> Value {
    json!([
        {
            "name": "MCMCpack",
            "version": "1.7-0",
            "description": "Markov chain Monte Carlo for common statistical models, plus a general Metropolis sampler.",
            "maintainer": "Jong Hee Park",
            "categories": ["non-adaptive-metropolis-hastings"],
            "cran_url": "https://cran.r-project.org/package=MCMCpack",
            "documentation_url": "https://cran.r-project.org/web/packages/MCMCpack/MCMCpack.pdf",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-15"
        },
        {
            "name": "mcmc",
            "version": "0.9-8",
            "description": "Random walk Metropolis for arbitrary user-written log unnormalized densities.",
            "maintainer": "Charles J. Geyer",
            "categories": ["non-adaptive-metropolis-hastings"],
            "cran_url": "https://cran.r-project.org/package=mcmc",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-15"
        },
        {
            "name": "adaptMCMC",
            "version": "1.5",
            "description": "Robust adaptive Metropolis sampler with coerced acceptance rate.",
            "maintainer": "Andreas Scheidegger",
            "categories": ["adaptive-metropolis-hastings"],
            "cran_url": "https://cran.r-project.org/package=adaptMCMC",
            "github_url": "https://github.com/scheidan/adaptMCMC",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-03"
        },
        {
            "name": "MCMCglmm",
            "version": "2.35",
            "description": "Gibbs sampling for multivariate generalized linear mixed models.",
            "maintainer": "Jarrod Hadfield",
            "categories": ["gibbs-sampler"],
            "cran_url": "https://cran.r-project.org/package=MCMCglmm",
            "documentation_url": "https://cran.r-project.org/web/packages/MCMCglmm/vignettes/CourseNotes.pdf",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-20"
        },
        {
            "name": "rstan",
            "version": "2.32.6",
            "description": "R interface to Stan: NUTS and HMC with automatic differentiation.",
            "maintainer": "Ben Goodrich",
            "categories": ["hamiltonian-monte-carlo"],
            "cran_url": "https://cran.r-project.org/package=rstan",
            "documentation_url": "https://mc-stan.org/rstan/",
            "github_url": "https://github.com/stan-dev/rstan",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-01-18"
        },
        {
            "name": "BayesianTools",
            "version": "0.1.8",
            "description": "General-purpose MCMC and SMC toolbox with DE, DEzs, and tempering samplers.",
            "maintainer": "Florian Hartig",
            "categories": ["population-based-algorithms"],
            "cran_url": "https://cran.r-project.org/package=BayesianTools",
            "github_url": "https://github.com/florianhartig/BayesianTools",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-02-15"
        },
        {
            "name": "pomp",
            "version": "5.11",
            "description": "Inference for partially observed Markov processes, including particle MCMC.",
            "maintainer": "Aaron A. King",
            "categories": ["sequential-algorithms"],
            "cran_url": "https://cran.r-project.org/package=pomp",
            "documentation_url": "https://kingaa.github.io/pomp/",
            "github_url": "https://github.com/kingaa/pomp",
            "contributor": "MCMC Atlas Team",
            "date_added": "2024-03-01"
        }
    ])
}

fn main() {
    let dir = std::path::Path::new("sample_data");
    std::fs::create_dir_all(dir).expect("Failed to create sample_data directory");

    let algorithms = algorithms();
    let packages = packages();

    std::fs::write(
        dir.join("algorithms.json"),
        serde_json::to_string_pretty(&algorithms).expect("Failed to serialize algorithms"),
    )
    .expect("Failed to write algorithms.json");

    std::fs::write(
        dir.join("packages.json"),
        serde_json::to_string_pretty(&packages).expect("Failed to serialize packages"),
    )
    .expect("Failed to write packages.json");

    println!(
        "Wrote {} algorithms and {} packages to {}",
        algorithms.as_array().map_or(0, |a| a.len()),
        packages.as_array().map_or(0, |p| p.len()),
        dir.display()
    );
}
