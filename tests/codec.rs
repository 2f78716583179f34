use bitcodec::codec::{
    CodecError, hex_byte, hexdump, hexlify, pack_f64, pack_u8, pack_u32, unhexlify, unpack_f64,
    unpack_u8, unpack_u32,
};

#[test]
fn codec_hex_byte_is_zero_padded_lowercase() {
    assert_eq!(hex_byte(0x00), "00");
    assert_eq!(hex_byte(0x0f), "0f");
    assert_eq!(hex_byte(0xab), "ab");
    assert_eq!(hex_byte(0xff), "ff");
}

#[test]
fn codec_hexlify_preserves_order() {
    assert_eq!(hexlify(&[]), "");
    assert_eq!(hexlify(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    assert_eq!(hexlify(&[0x00, 0x01, 0xff]), "0001ff");
}

#[test]
fn codec_unhexlify_inverts_hexlify() {
    let bytes = [0x00u8, 0x7f, 0x80, 0xff, 0x12, 0x34];
    assert_eq!(unhexlify(&hexlify(&bytes)).unwrap(), bytes);

    assert_eq!(unhexlify("").unwrap(), Vec::<u8>::new());
    assert_eq!(unhexlify("cafebabe").unwrap(), vec![0xca, 0xfe, 0xba, 0xbe]);
}

#[test]
fn codec_unhexlify_accepts_uppercase() {
    assert_eq!(unhexlify("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(unhexlify("DeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn codec_unhexlify_rejects_odd_length() {
    assert_eq!(unhexlify("abc"), Err(CodecError::InvalidFormat));
    assert_eq!(unhexlify("1"), Err(CodecError::InvalidFormat));
}

#[test]
fn codec_unhexlify_rejects_non_hex_characters() {
    assert_eq!(unhexlify("zz"), Err(CodecError::InvalidFormat));
    assert_eq!(unhexlify("12g4"), Err(CodecError::InvalidFormat));
    assert_eq!(unhexlify("0x12"), Err(CodecError::InvalidFormat));
}

#[test]
fn codec_hexdump_groups_sixteen_bytes_per_line() {
    let data: Vec<u8> = (0u8..17).collect();
    let dump = hexdump(&data);

    let lines: Vec<&str> = dump.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "00 01 02 03 04 05 06 07   08 09 0a 0b 0c 0d 0e 0f"
    );
    assert_eq!(lines[1], "10");
}

#[test]
fn codec_hexdump_short_line_has_no_extra_gap() {
    assert_eq!(hexdump(&[0xaa, 0xbb, 0xcc]), "aa bb cc");
    assert_eq!(hexdump(&[]), "");
}

#[test]
fn codec_pack_unpack_u8() {
    assert_eq!(pack_u8(0x41), [0x41]);
    assert_eq!(unpack_u8(&[0x41]).unwrap(), 0x41);
    assert_eq!(unpack_u8(&[]), Err(CodecError::SizeMismatch));
    assert_eq!(unpack_u8(&[1, 2]), Err(CodecError::SizeMismatch));
}

#[test]
fn codec_pack_unpack_u32_little_endian() {
    assert_eq!(pack_u32(0xdeadbeef), [0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(unpack_u32(&[0xef, 0xbe, 0xad, 0xde]).unwrap(), 0xdeadbeef);
    assert_eq!(unpack_u32(&[1, 2, 3]), Err(CodecError::SizeMismatch));
    assert_eq!(unpack_u32(&[1, 2, 3, 4, 5]), Err(CodecError::SizeMismatch));
}

#[test]
fn codec_pack_f64_is_bit_exact() {
    assert_eq!(pack_f64(1.0), 1.0f64.to_bits().to_le_bytes());

    for d in [0.0, -0.0, 1.5, -13.37, f64::MAX, f64::MIN_POSITIVE] {
        let packed = pack_f64(d);
        let back = unpack_f64(&packed).unwrap();
        assert_eq!(back.to_bits(), d.to_bits());
    }
}

#[test]
fn codec_unpack_f64_requires_eight_bytes() {
    assert_eq!(unpack_f64(&[0u8; 7]), Err(CodecError::SizeMismatch));
    assert_eq!(unpack_f64(&[0u8; 9]), Err(CodecError::SizeMismatch));
    assert_eq!(unpack_f64(&[0u8; 8]).unwrap(), 0.0);
}

#[test]
fn codec_pack_f64_round_trips_nan_payloads() {
    // NaN payload bits must survive pack/unpack untouched.
    let nan = f64::from_bits(0x7ff8_0000_dead_beef);
    let packed = pack_f64(nan);
    assert_eq!(unpack_f64(&packed).unwrap().to_bits(), nan.to_bits());
}
