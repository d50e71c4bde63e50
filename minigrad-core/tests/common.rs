use minigrad_core::{Graph, Init, Network, NetworkConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Initializes env_logger once per test binary; repeated calls are ignored.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Builds a seeded network on a fresh f64 graph.
#[allow(dead_code)]
pub fn seeded_network(
    input_dim: usize,
    layer_sizes: Vec<usize>,
    seed: u64,
) -> (Graph<f64>, Network) {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let config = NetworkConfig::new(input_dim, layer_sizes)
        .with_bias_init(Init::Uniform { low: -0.5, high: 0.5 });
    let network =
        Network::new(&mut graph, &config, &mut rng).expect("Test network creation failed");
    (graph, network)
}
