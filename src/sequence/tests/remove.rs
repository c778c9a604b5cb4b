use crate::sequence::prelude::*;

#[test]
fn remove() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1, 2, 2, 3]);

    // first match only; multiplicity drops by exactly one
    sequence.remove(&2)?;
    assert_eq!(sequence.snapshot(), vec![1, 2, 3]);
    assert_eq!(sequence.count(&2), 1);

    sequence.remove(&2)?;
    assert!(!sequence.contains(&2));

    Ok(())
}

#[test]
fn remove_value_not_found() {
    let sequence = Sequence::from_values([1, 2, 3]);

    assert_eq!(sequence.remove(&100).unwrap_err(), Error::ValueNotFound);
    // failed removal leaves the sequence unchanged
    assert_eq!(sequence.snapshot(), vec![1, 2, 3]);
}

#[test]
fn pop() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1, 2, 3]);

    // no index -> last element
    assert_eq!(sequence.pop(None)?.value(), 3);
    // explicit index -> that element
    assert_eq!(sequence.pop(Some(0))?.value(), 1);
    assert_eq!(sequence.snapshot(), vec![2]);

    Ok(())
}

#[test]
fn pop_out_of_bounds() {
    let sequence = Sequence::<i32>::allocate(1);

    assert_eq!(
        sequence.pop(None).unwrap_err(),
        Error::IndexOutOfRange {
            index: -1,
            length: 0
        }
    );

    sequence.append(Candidate::Value(42));
    assert!(sequence.pop(Some(1)).is_err());
    assert_eq!(sequence.length(), 1);
}

#[test]
fn delete() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1, 2, 3]);

    sequence.delete(1)?;
    assert_eq!(sequence.snapshot(), vec![1, 3]);

    sequence.delete(-1)?;
    assert_eq!(sequence.snapshot(), vec![1]);

    assert!(sequence.delete(5).is_err());

    Ok(())
}

#[test]
fn clear() {
    let sequence = Sequence::from_values([1, 2, 3]);
    let copy = sequence.shallow_copy();

    sequence.clear();
    assert!(sequence.is_empty());
    // the shallow copy keeps its own slots alive
    assert_eq!(copy.length(), 3);
}
