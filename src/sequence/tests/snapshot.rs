use crate::sequence::prelude::*;

#[test]
fn snapshot() {
    let sequence = Sequence::from_values([1, 2, 3]);

    let snapshot = sequence.snapshot();
    assert_eq!(snapshot, vec![1, 2, 3]);

    // detached: later mutation is invisible to the snapshot
    sequence.append(Candidate::Value(4));
    assert_eq!(snapshot, vec![1, 2, 3]);
}

#[test]
fn iteration_over_elements() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([10, 20, 30]);

    let mut collected = Vec::new();
    for element in &sequence {
        collected.push(element.value());
    }
    assert_eq!(collected, vec![10, 20, 30]);

    for (index, value) in sequence.values().enumerate() {
        assert_eq!(value, (index as i32 + 1) * 10);
    }

    Ok(())
}

#[test]
fn structural_mutation_during_iteration_is_safe() -> anyhow::Result<()> {
    // removing while iterating: the iterator walks a snapshot of the slot
    // vector, so nothing is skipped or repeated
    let numbers = Sequence::from_values([0, 1, 2, 3, 4, 5]);

    for element in &numbers {
        let value = element.value();
        if value % 2 == 0 {
            numbers.remove(&value)?;
        }
    }

    assert_eq!(numbers.snapshot(), vec![1, 3, 5]);

    Ok(())
}

#[test]
fn iterator_length() {
    let sequence = Sequence::from_values([1, 2, 3]);
    let iter = sequence.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.count(), 3);
}

#[test]
fn collecting() {
    let sequence: Sequence<i32> = (1..=3).collect();
    assert_eq!(sequence.snapshot(), vec![1, 2, 3]);

    let from_vec = Sequence::from(vec![4, 5]);
    assert_eq!(from_vec.snapshot(), vec![4, 5]);
}

#[test]
fn debug_rendering() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1, 2, 3]);
    assert_eq!(format!("{sequence:?}"), "[1, 2, 3]");

    assert_eq!(format!("{:?}", Sequence::<i32>::allocate(0)), "[]");

    // a cell held under a write borrow renders as <borrowed>
    let element = sequence.get(1)?;
    let guard = element.write();
    assert_eq!(format!("{sequence:?}"), "[1, <borrowed>, 3]");
    drop(guard);

    Ok(())
}
