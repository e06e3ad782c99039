//! Property tests checking the buffer against a `VecDeque` model.

use proptest::prelude::*;
use seqbuf::SequenceBuffer;
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
enum Op {
    Write(u16),
    WriteAll(Vec<u16>),
    WriteSlice(Vec<u16>),
    Read,
    Grow(usize),
    Reset,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Write),
        2 => prop::collection::vec(any::<u16>(), 0..24).prop_map(Op::WriteAll),
        1 => prop::collection::vec(any::<u16>(), 0..24).prop_map(Op::WriteSlice),
        4 => Just(Op::Read),
        1 => (0usize..48).prop_map(Op::Grow),
        1 => Just(Op::Reset),
    ]
}

/// Cursor invariant `read <= write <= capacity`, observed through the
/// public accessors.
fn assert_cursor_invariant(buffer: &SequenceBuffer<u16>) -> Result<(), TestCaseError> {
    prop_assert!(buffer.len() <= buffer.capacity());
    prop_assert!(buffer.remaining() <= buffer.capacity() - buffer.len());
    prop_assert_eq!(buffer.view().len(), buffer.len());
    Ok(())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every operation sequence keeps the cursor invariant and FIFO order.
    #[test]
    fn buffer_matches_fifo_model(
        capacity in 0usize..16,
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        init_test_logging();
        let mut buffer = SequenceBuffer::with_capacity(capacity);
        let mut model: VecDeque<u16> = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(value) => {
                    buffer.write(value);
                    model.push_back(value);
                }
                Op::WriteAll(values) => {
                    model.extend(values.iter().copied());
                    buffer.write_all(values);
                }
                Op::WriteSlice(values) => {
                    buffer.write_slice(&values);
                    model.extend(values);
                }
                Op::Read => {
                    prop_assert_eq!(buffer.read(), model.pop_front());
                }
                Op::Grow(additional) => {
                    let before = buffer.capacity();
                    buffer.grow(additional);
                    prop_assert!(buffer.remaining() >= additional);
                    prop_assert!(
                        buffer.capacity() == before
                            || buffer.capacity() == additional + 2 * before
                    );
                }
                Op::Reset => {
                    prop_assert_eq!(buffer.reset(), model.len());
                    model.clear();
                }
            }
            assert_cursor_invariant(&buffer)?;
            prop_assert_eq!(buffer.len(), model.len());
            prop_assert!(buffer.view().iter().eq(model.iter()));
        }
    }

    /// `k` writes without reads leave exactly `k` unread elements.
    #[test]
    fn len_equals_number_of_writes(
        capacity in 0usize..8,
        values in prop::collection::vec(any::<u16>(), 0..300),
    ) {
        let mut buffer = SequenceBuffer::with_capacity(capacity);
        for (written, value) in values.iter().enumerate() {
            buffer.write(*value);
            prop_assert_eq!(buffer.len(), written + 1);
        }
    }

    /// Draining returns the writes in order, then signals end-of-stream and
    /// rewinds, so the next write lands at the front of the store.
    #[test]
    fn drain_then_write_restarts_at_front(
        capacity in 0usize..8,
        values in prop::collection::vec(any::<u16>(), 1..64),
    ) {
        let mut buffer = SequenceBuffer::with_capacity(capacity);
        buffer.write_all(values.iter().copied());

        let mut read_back = Vec::with_capacity(values.len());
        for _ in 0..buffer.len() {
            let value = buffer.read();
            prop_assert!(value.is_some());
            read_back.extend(value);
        }
        prop_assert_eq!(&read_back, &values);
        prop_assert_eq!(buffer.read(), None);
        prop_assert_eq!(buffer.len(), 0);
        prop_assert_eq!(buffer.remaining(), buffer.capacity());

        let capacity_before = buffer.capacity();
        buffer.write(values[0]);
        prop_assert_eq!(buffer.len(), 1);
        prop_assert_eq!(buffer.capacity(), capacity_before);
    }
}
