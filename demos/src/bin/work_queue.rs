//! Example: drain a queue of pending jobs while new jobs keep arriving.

use seqbuf::prelude::*;
use tracing::{Level, info, warn};

#[derive(Debug, Default, Clone)]
struct Job {
    id: u32,
    payload: String,
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    println!("=== Work Queue Demo ===\n");

    let mut queue: SequenceBuffer<Job> = SequenceBuffer::new();

    // Initial burst handled as one batch
    queue.write_all((1..7).map(|id| Job {
        id,
        payload: format!("initial-{id}"),
    }));
    info!(
        pending = queue.len(),
        capacity = queue.capacity(),
        "initial burst queued"
    );

    // Process two jobs per tick, enqueue one new job per tick
    let mut next_id = 7;
    for tick in 1..=5 {
        for _ in 0..2 {
            match queue.read() {
                Some(job) => {
                    println!("tick {tick}: processed job {} ({})", job.id, job.payload)
                }
                None => println!("tick {tick}: queue empty"),
            }
        }
        queue.write(Job {
            id: next_id,
            payload: format!("tick-{tick}"),
        });
        next_id += 1;
        info!(
            pending = queue.len(),
            capacity = queue.capacity(),
            tick,
            "tick done"
        );
    }

    // Shutdown: anything still pending is dropped
    let discarded = queue.reset();
    if discarded > 0 {
        warn!(discarded, "shutdown discarded pending jobs");
    }

    match queue.try_grow(usize::MAX) {
        Ok(()) => println!("\nunexpectedly grew to {}", queue.capacity()),
        Err(err) => println!("\noversized request rejected: {err}"),
    }
}
