use crate::sequence::prelude::*;

#[test]
fn reverse() {
    let numbers = Sequence::from_values([1, 2, 3, 4]);

    numbers.reverse();
    assert_eq!(numbers.snapshot(), vec![4, 3, 2, 1]);

    numbers.reverse();
    assert_eq!(numbers.snapshot(), vec![1, 2, 3, 4]);
}

#[test]
fn reverse_empty_and_single() {
    let empty = Sequence::<i32>::allocate(0);
    empty.reverse();
    assert!(empty.is_empty());

    let single = Sequence::from_values([1]);
    single.reverse();
    assert_eq!(single.snapshot(), vec![1]);
}

#[test]
fn reverse_does_not_affect_shallow_copies() {
    let numbers = Sequence::from_values([1, 2, 3]);
    let copy = numbers.shallow_copy();

    numbers.reverse();

    assert_eq!(numbers.snapshot(), vec![3, 2, 1]);
    assert_eq!(copy.snapshot(), vec![1, 2, 3]);
}

#[test]
fn reversed_copy() -> anyhow::Result<()> {
    let numbers = Sequence::from_values([1, 2, 3]);

    let reversed = numbers.reversed();
    assert_eq!(reversed.snapshot(), vec![3, 2, 1]);
    assert_eq!(numbers.snapshot(), vec![1, 2, 3]);

    // values were cloned; no cells are shared
    numbers.modify(0, 100)?;
    assert_eq!(reversed.get(-1)?.value(), 1);

    Ok(())
}
