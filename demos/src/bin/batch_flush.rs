//! Example: accumulate log lines and flush them in fixed-size batches.
//!
//! The subscriber runs at `TRACE`, so the buffer's growth decisions and
//! cursor rewinds show up between the flushes.

use seqbuf::prelude::*;
use tracing::{Level, info};

const FLUSH_THRESHOLD: usize = 5;

fn flush(buffer: &mut SequenceBuffer<String>, batch: &mut u32) {
    *batch += 1;
    let lines: Vec<String> = buffer.drain().collect();
    info!(batch = *batch, lines = lines.len(), "flushing");
    for line in &lines {
        println!("  [batch {batch}] {line}");
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    println!("=== Batch Flush Demo ===\n");

    let mut buffer: SequenceBuffer<String> = SequenceBuffer::with_capacity(4);
    let mut batch = 0;

    for i in 1..=12 {
        buffer.write(format!("event #{i}"));
        if buffer.len() >= FLUSH_THRESHOLD {
            flush(&mut buffer, &mut batch);
        }
    }
    if !buffer.is_empty() {
        flush(&mut buffer, &mut batch);
    }

    println!(
        "\nFinal state: len={}, capacity={}",
        buffer.len(),
        buffer.capacity()
    );
}
