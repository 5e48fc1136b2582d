use pixelcloak_core::bit_stream::{from_bits, payload_bits, to_bits, BitIterator, END_MARKER_LEN};

#[test]
fn should_return_the_bits_of_h_most_significant_first() {
    let b = [0b0100_1000, 0b0110_0001];
    let mut it = BitIterator::new(&b[..]);

    assert_eq!(it.next(), Some(false), "1st bit not correct");
    assert_eq!(it.next(), Some(true), "2nd bit not correct");
    assert_eq!(it.next(), Some(false), "3rd bit not correct");
    assert_eq!(it.next(), Some(false), "4th bit not correct");
    assert_eq!(it.next(), Some(true), "5th bit not correct");
    assert_eq!(it.next(), Some(false), "6th bit not correct");
    assert_eq!(it.next(), Some(false), "7th bit not correct");
    assert_eq!(it.next(), Some(false), "8th bit not correct");
}

#[test]
fn should_end_after_the_last_bit_of_the_last_byte() {
    let b = [0b0100_1000, 0b0110_0001];
    let mut it = BitIterator::new(&b[..]).skip(15);

    assert_eq!(it.next(), Some(true));
    assert_eq!(
        it.next(),
        None,
        "it should end after the last bit on the last byte"
    );
}

#[test]
fn should_terminate_every_payload_with_the_end_marker() {
    let bits: Vec<bool> = payload_bits(b"A").collect();

    assert_eq!(bits.len(), 8 + END_MARKER_LEN);
    assert_eq!(from_bits(&bits[..8]).unwrap(), b"A");
    assert!(bits[8..23].iter().all(|b| *b), "15 ones first");
    assert!(!bits[23], "and a single zero last");
}

#[test]
fn should_pack_bits_back_into_the_same_bytes() {
    let data = b"\x00\xff\x7f\x80 arbitrary bytes";

    assert_eq!(from_bits(&to_bits(data)).unwrap(), data);
}
