use crate::sequence::prelude::*;

#[test]
fn get() -> anyhow::Result<()> {
    let sequence = Sequence::<i32>::allocate(1);

    // empty sequence -> error
    assert!(sequence.get(0).is_err());

    sequence.insert(0, Candidate::Value(42));
    assert_eq!(sequence.get(0)?.value(), 42);

    Ok(())
}

#[test]
fn get_negative_index() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([10, 20, 30]);

    assert_eq!(sequence.get(-1)?.value(), 30);
    assert_eq!(sequence.get(-2)?.value(), 20);
    assert_eq!(sequence.get(-3)?.value(), 10);
    assert!(sequence.get(-4).is_err());

    Ok(())
}

#[test]
fn get_out_of_range() {
    let sequence = Sequence::from_values([1, 2, 3]);

    assert_eq!(
        sequence.get(5).unwrap_err(),
        Error::IndexOutOfRange {
            index: 5,
            length: 3
        }
    );
    assert_eq!(
        sequence.get(3).unwrap_err(),
        Error::IndexOutOfRange {
            index: 3,
            length: 3
        }
    );
}

#[test]
fn get_positions_after_append() -> anyhow::Result<()> {
    let sequence = Sequence::<usize>::allocate(100);
    for i in 0..100 {
        sequence.append(Candidate::Value(i));
    }

    for i in 0..100isize {
        assert_eq!(sequence.get(i)?.value(), i as usize);
    }

    Ok(())
}

#[test]
fn get_handle_writes_through() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([42]);

    let element = sequence.get(0)?;
    *element.write() += 1;

    assert_eq!(sequence.get(0)?.value(), 43);

    Ok(())
}
