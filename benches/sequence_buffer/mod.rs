use criterion::Criterion;


/// Register all sequence buffer benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    write_read::register_benchmarks(c);
    growth::register_benchmarks(c);
}
