use crate::sequence::prelude::*;

#[test]
fn round_trip() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1i32, 2, 3]);

    let bytes = sequence.bincode(&BincodeConfiguration::default())?;
    let decoded = Sequence::<i32>::from_bincode(&bytes, &BincodeConfiguration::default())?;

    assert!(decoded.value_eq(&sequence));
    // the codec works on a snapshot; decoded cells are fresh
    assert!(!decoded.cell_eq(&sequence));

    Ok(())
}

#[test]
fn byte_limit_is_enforced() -> anyhow::Result<()> {
    let sequence = Sequence::from_values([1i64, 2, 3, 4, 5, 6, 7, 8]);

    let limited = BincodeConfiguration { byte_limit: Some(4) };
    assert!(sequence.bincode(&limited).is_err());

    // unlimited encode, limited decode
    let bytes = sequence.bincode(&BincodeConfiguration::default())?;
    assert!(Sequence::<i64>::from_bincode(&bytes, &limited).is_err());

    Ok(())
}
