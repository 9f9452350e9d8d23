use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Maximum number of CNAME hops a resolution may take before it is
    /// reported as a too-long chain. Cycles are detected separately via
    /// the visited set, so this only bounds non-repeating chains.
    #[serde(default = "default_max_chain_length")]
    pub max_chain_length: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_chain_length: default_max_chain_length(),
        }
    }
}

fn default_max_chain_length() -> usize {
    10
}
