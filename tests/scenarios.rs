//! End-to-end scenarios through the public API.

use packet_alu::host::bytes_to_packets;
use packet_alu::{
    add, compare_magnitude, from_decimal, from_decimal_exact, subtract, to_decimal, AluError,
    AluFlags, Packet, Sign,
};

fn p(s: &str) -> Packet {
    Packet::parse(s).unwrap()
}

#[test]
fn test_known_values() {
    assert_eq!(to_decimal(&p("0101")).unwrap(), 5);
    assert_eq!(from_decimal(255, 8).unwrap(), p("1111_1111"));
}

#[test]
fn test_carry_fits_in_five_bits() {
    let (result, flags) = add(&p("1111"), &p("1111"), 5).unwrap();
    assert_eq!(result, p("11110"));
    assert_eq!(to_decimal(&result).unwrap(), 30);
    assert_eq!(flags, AluFlags::new(Sign::Positive, false));
}

#[test]
fn test_carry_overflows_four_bits() {
    let (_, flags) = add(&p("1111"), &p("1111"), 4).unwrap();
    assert!(flags.overflow());
}

#[test]
fn test_subtract_chain_with_flags() {
    let (diff, flags) = subtract(&p("1100"), &p("0100"), 4).unwrap();
    assert_eq!(to_decimal(&diff).unwrap(), 8);
    assert!(flags.positive());

    let (diff, flags) = subtract(&diff, &p("1000"), 4).unwrap();
    assert!(diff.is_zero());
    assert!(flags.zero());
    assert!(!flags.positive() && !flags.negative());

    let (diff, flags) = subtract(&diff, &p("1"), 4).unwrap();
    assert_eq!(diff, p("1111"));
    assert_eq!(flags, AluFlags::new(Sign::Negative, true));
}

#[test]
fn test_byte_stream_operands() {
    // Bytes read from the host feed straight into the ALU.
    let packets = bytes_to_packets(&[200, 100]);
    let (sum, flags) = add(&packets[0], &packets[1], 8).unwrap();
    assert_eq!(to_decimal(&sum).unwrap(), 300 - 256);
    assert!(flags.overflow());

    let (greater, flags) = compare_magnitude(&packets[0], &packets[1]).unwrap();
    assert!(greater);
    assert!(flags.positive());
}

#[test]
fn test_errors_surface_to_caller() {
    assert_eq!(
        to_decimal(&Packet::zeros(70)),
        Err(AluError::WidthOverflow { width: 70, limit: 64 })
    );
    assert_eq!(
        subtract(&p("111"), &p("1"), 2),
        Err(AluError::WidthOverflow { width: 3, limit: 2 })
    );
    assert_eq!(
        from_decimal_exact(16, 4),
        Err(AluError::ValueTruncated { value: 16, width: 4 })
    );
    assert!(compare_magnitude(&p("1"), &p("01")).is_err());
}

#[test]
fn test_error_messages() {
    let err = AluError::WidthOverflow { width: 65, limit: 64 };
    assert_eq!(err.to_string(), "width 65 exceeds the limit of 64 bits");
}

#[test]
fn test_operations_are_thread_safe() {
    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            std::thread::spawn(move || {
                let a = from_decimal(i * 10, 16).unwrap();
                let b = from_decimal(i, 16).unwrap();
                let (sum, _) = add(&a, &b, 16).unwrap();
                to_decimal(&sum).unwrap()
            })
        })
        .collect();

    for (i, handle) in (0..4u64).zip(handles) {
        assert_eq!(handle.join().unwrap(), i * 11);
    }
}
