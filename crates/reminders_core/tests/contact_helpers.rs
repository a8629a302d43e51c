use reminders_core::{format_phone, is_valid_email, phone_digits};

const SAMPLES: &[&str] = &[
    "",
    "12345",
    "0123456789",
    "01.23 45-67/89",
    "+33 6 12 34 56 78",
    "(555) 010-9999 ext. 42",
    "abc",
    "jean@exemple.fr",
    "06 12 34 56 78 90 12",
    "١٢٣ 0612",
];

#[test]
fn strings_without_at_are_never_valid_emails() {
    for input in SAMPLES.iter().filter(|s| !s.contains('@')) {
        assert!(!is_valid_email(input), "unexpectedly valid: {input:?}");
    }
}

#[test]
fn email_reference_cases() {
    assert!(is_valid_email("a@b.c"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email(""));
}

#[test]
fn whitespace_anywhere_invalidates_a_valid_address() {
    let valid = "jean.dupont@exemple.fr";
    assert!(is_valid_email(valid));
    for ws in [" ", "\t", "\n", "\u{00A0}", "\u{FEFF}"] {
        for cut in [0, 4, 11, 12, 19, valid.len()] {
            let broken = format!("{}{ws}{}", &valid[..cut], &valid[cut..]);
            assert!(!is_valid_email(&broken), "unexpectedly valid: {broken:?}");
        }
    }
}

#[test]
fn formatted_phone_only_has_digits_and_spaces() {
    for input in SAMPLES {
        let formatted = format_phone(input);
        assert!(
            formatted.chars().all(|c| c.is_ascii_digit() || c == ' '),
            "unexpected output {formatted:?} for {input:?}"
        );
    }
}

#[test]
fn phone_reference_cases() {
    assert_eq!(format_phone("01.23 45-67/89"), "01 23 45 67 89");
    assert_eq!(format_phone("12345"), "12345");
    assert_eq!(format_phone("+33 6 12 34 56 78"), "33 61 23 45 67");
}

#[test]
fn formatting_is_idempotent() {
    assert_eq!(format_phone("01 23 45 67 89"), "01 23 45 67 89");
    for input in SAMPLES {
        let once = format_phone(input);
        assert_eq!(format_phone(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn long_numbers_are_truncated_to_ten_digits() {
    let formatted = format_phone("06 12 34 56 78 90 12");
    assert_eq!(formatted, "06 12 34 56 78");
    assert_eq!(phone_digits(&formatted).len(), 10);
}
