// maskform-core/tests/masker_tests.rs
use maskform_core::maskers::*;

#[test]
fn email_v1_masks_local_part_after_two_chars() {
    assert_eq!(mask_email("abcdefg12345@naver.com"), "ab**********@naver.com");
    assert_eq!(mask_email("user99@example.co.kr"), "us****@example.co.kr");
    // Nothing left to hide after the first two characters.
    assert_eq!(mask_email("ab@naver.com"), "ab@naver.com");
}

#[test]
fn email_v1_is_fail_open() {
    // One-character local parts and non-addresses pass through UNMASKED.
    assert_eq!(mask_email("a@naver.com"), "a@naver.com");
    assert_eq!(mask_email("not-an-email"), "not-an-email");
}

#[test]
fn email_v2_masks_domain_name_but_keeps_tld() {
    assert_eq!(
        mask_email_domain("abcdefg12345@naver.com"),
        "ab**********@nav**.com"
    );
    // The domain splits at its LAST dot.
    assert_eq!(
        mask_email_domain("user99@mail.naver.com"),
        "us****@mai*******.com"
    );
    // Domain names of three or fewer characters have nothing to hide.
    assert_eq!(mask_email_domain("ab@io.kr"), "ab@io.kr");
}

#[test]
fn email_v3_collapses_the_domain_entirely() {
    assert_eq!(mask_email_full("abcdefg12345@naver.com"), "abcd********@******");
    // Local parts of up to four characters stay unchanged.
    assert_eq!(mask_email_full("abc@naver.com"), "abc@******");
    assert_eq!(mask_email_full("abcd@naver.com"), "abcd@******");
    assert_eq!(mask_email_full("abcde@naver.com"), "abcd*@******");
}

#[test]
fn email_v3_is_fail_open() {
    assert_eq!(mask_email_full("nodomain"), "nodomain");
    assert_eq!(mask_email_full("@naver.com"), "@naver.com");
}

#[test]
fn phone_masks_only_the_middle_group() {
    assert_eq!(mask_phone("010-1234-5678"), "010-****-5678");
    assert_eq!(mask_phone("011-123-4567"), "011-***-4567");
    assert_eq!(mask_phone("0111234567"), "011***4567");
    assert_eq!(mask_phone("01012345678"), "010****5678");
    assert_eq!(mask_phone("02-123-4567"), "02-***-4567");
}

#[test]
fn phone_is_fail_open() {
    assert_eq!(mask_phone("12345"), "12345");
    assert_eq!(mask_phone("010-1234-567"), "010-1234-567");
    assert_eq!(mask_phone("phone"), "phone");
}

#[test]
fn rrn_keeps_birth_date_and_century_digit() {
    assert_eq!(mask_rrn("990101-1234567"), "990101-1******");
    assert_eq!(mask_rrn("9901011234567"), "9901011******");
}

#[test]
fn rrn_is_fail_open() {
    assert_eq!(mask_rrn("990101-123456"), "990101-123456");
    assert_eq!(mask_rrn("99010112345678"), "99010112345678");
}

#[test]
fn name_masking_by_length() {
    assert_eq!(mask_name("갓댐희"), "갓*희");
    assert_eq!(mask_name("하늘에수"), "하**수");
    assert_eq!(mask_name("갓댐"), "갓*");
    assert_eq!(mask_name("김"), "김");
    assert_eq!(mask_name("Christopher"), "C*********r");
}

#[test]
fn name_remasking_pins_current_behavior() {
    // Re-masking is unspecified upstream; this pins what the
    // implementation does today rather than promising it.
    assert_eq!(mask_name("갓*희"), "갓*희");
    assert_eq!(mask_name("갓*"), "갓*");
}

#[test_log::test]
fn empty_name_passes_through_with_a_diagnostic_only() {
    assert_eq!(mask_name(""), "");
}
