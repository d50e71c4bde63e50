//! # Training a small MLP with plain gradient descent
//!
//! Fits a 3 -> 4 -> 4 -> 1 network to four labelled points:
//! 1. Parameters are created once; the graph is checkpointed right after.
//! 2. Each step builds the loss, resets parameter gradients and runs `backward`.
//! 3. Parameters are updated in place with `set_value`.
//! 4. The per-step nodes are discarded again with `rewind`.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example basic_mlp_cpu`

use log::info;
use minigrad_core::{Graph, MinigradError, Module, Network, NetworkConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MinigradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let network = Network::new(&mut graph, &NetworkConfig::new(3, vec![4, 4, 1]), &mut rng)?;
    let params = network.parameters();
    let mark = graph.checkpoint();
    info!("Network with {} parameters", params.len());

    let learning_rate = 0.02;
    for step in 0..100 {
        let mut loss = graph.scalar(0.0);
        let mut predictions = Vec::with_capacity(xs.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            let out = network
                .forward_values(&mut graph, x)?
                .as_scalar()
                .ok_or_else(|| {
                    MinigradError::InternalError("expected a scalar output".to_string())
                })?;
            predictions.push(graph.value(out)?);
            let diff = graph.sub(out, *y)?;
            let sq = graph.pow(diff, 2.0)?;
            loss = graph.add(loss, sq)?;
        }

        network.zero_grad(&mut graph)?;
        graph.backward(loss)?;
        for p in &params {
            let updated = p.value(&graph)? - learning_rate * p.grad(&graph)?;
            p.set_value(&mut graph, updated)?;
        }

        if step % 10 == 0 {
            info!(
                "step {:3}: loss = {:.6}, predictions = {:?}",
                step,
                graph.value(loss)?,
                predictions
            );
        }
        graph.rewind(mark)?;
    }

    println!("Training finished; graph holds {} nodes", graph.len());
    Ok(())
}
