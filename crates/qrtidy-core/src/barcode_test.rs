use super::*;

// -----------------------------------------------------------------------
// classify
// -----------------------------------------------------------------------

#[test]
fn classify_single_isbn_is_book() {
    assert_eq!(
        classify("9784047914742"),
        CodeClassification::Book {
            isbn: "9784047914742".to_owned()
        }
    );
}

#[test]
fn classify_979_prefix_is_book() {
    assert_eq!(
        classify("9791234567896"),
        CodeClassification::Book {
            isbn: "9791234567896".to_owned()
        }
    );
}

#[test]
fn classify_two_tier_extracts_isbn_segment() {
    assert_eq!(
        classify("9784047914742-1920045018009"),
        CodeClassification::Book {
            isbn: "9784047914742".to_owned()
        }
    );
}

#[test]
fn classify_two_tier_finds_isbn_in_second_position() {
    assert_eq!(
        classify("1920045018009-9784047914742"),
        CodeClassification::Book {
            isbn: "9784047914742".to_owned()
        }
    );
}

#[test]
fn classify_two_tier_first_isbn_segment_wins() {
    assert_eq!(
        classify("9784000000001-9790000000002"),
        CodeClassification::Book {
            isbn: "9784000000001".to_owned()
        }
    );
}

#[test]
fn classify_magazine_jan() {
    assert_eq!(
        classify("4910012345678"),
        CodeClassification::Magazine {
            jan: "4910012345678".to_owned()
        }
    );
}

#[test]
fn classify_general_product_jan() {
    assert_eq!(
        classify("4901234567890"),
        CodeClassification::GeneralProduct {
            jan: "4901234567890".to_owned()
        }
    );
}

#[test]
fn classify_ean8_is_general_product() {
    assert_eq!(
        classify("49123456"),
        CodeClassification::GeneralProduct {
            jan: "49123456".to_owned()
        }
    );
}

#[test]
fn classify_ean8_with_magazine_prefix_is_magazine() {
    assert_eq!(
        classify("49100123"),
        CodeClassification::Magazine {
            jan: "49100123".to_owned()
        }
    );
}

#[test]
fn classify_short_numeric_is_unknown() {
    assert_eq!(
        classify("12345"),
        CodeClassification::Unknown {
            raw: "12345".to_owned()
        }
    );
}

#[test]
fn classify_hyphenated_without_isbn_is_unknown() {
    // Each half is JAN-shaped, but no partial recovery is attempted.
    let raw = "4901234567890-1920045018009";
    assert_eq!(
        classify(raw),
        CodeClassification::Unknown {
            raw: raw.to_owned()
        }
    );
}

#[test]
fn classify_non_digit_13_chars_is_unknown() {
    assert!(matches!(
        classify("490123456789X"),
        CodeClassification::Unknown { .. }
    ));
}

#[test]
fn classify_url_payload_is_unknown() {
    assert!(matches!(
        classify("https://example.com/box/42"),
        CodeClassification::Unknown { .. }
    ));
}

#[test]
fn classify_empty_string_is_unknown() {
    assert_eq!(
        classify(""),
        CodeClassification::Unknown { raw: String::new() }
    );
}

#[test]
fn classify_full_width_digits_are_not_jan() {
    // 13 characters but multi-byte; must not panic or pass as a JAN.
    assert!(matches!(
        classify("４９０１２３４５６７８９０"),
        CodeClassification::Unknown { .. }
    ));
}

#[test]
fn classify_is_deterministic() {
    for raw in ["9784047914742-1920045018009", "4910012345678", "abc", ""] {
        assert_eq!(classify(raw), classify(raw));
    }
}

#[test]
fn lookup_key_matches_identifier() {
    assert_eq!(classify("9784047914742").lookup_key(), Some("9784047914742"));
    assert_eq!(classify("4901234567890").lookup_key(), Some("4901234567890"));
    assert_eq!(classify("12345").lookup_key(), None);
}

#[test]
fn classification_serializes_with_kind_tag() {
    let json = serde_json::to_value(classify("4910012345678")).unwrap();
    assert_eq!(json["kind"], "magazine");
    assert_eq!(json["jan"], "4910012345678");
}

// -----------------------------------------------------------------------
// describe
// -----------------------------------------------------------------------

#[test]
fn describe_two_tier_book() {
    assert_eq!(
        describe("9784047914742-1920045018009"),
        BarcodeKind::TwoTierBook
    );
}

#[test]
fn describe_two_tier_with_isbn_only() {
    assert_eq!(
        describe("9784047914742-4901234567890"),
        BarcodeKind::TwoTierWithIsbn
    );
}

#[test]
fn describe_two_tier_unrecognized() {
    assert_eq!(describe("123-456"), BarcodeKind::TwoTierUnrecognized);
}

#[test]
fn describe_single_codes() {
    assert_eq!(describe("9784047914742"), BarcodeKind::Isbn);
    assert_eq!(describe("4910012345678"), BarcodeKind::MagazineJan);
    assert_eq!(describe("1920045018009"), BarcodeKind::BookSecondTier);
    assert_eq!(describe("1910045018009"), BarcodeKind::MagazineSecondTier);
    assert_eq!(describe("4501234567890"), BarcodeKind::JapaneseProductJan);
    assert_eq!(describe("0012345678905"), BarcodeKind::Ean13);
    assert_eq!(describe("00123456"), BarcodeKind::Ean8);
    assert_eq!(describe("abc"), BarcodeKind::Unrecognized { len: 3 });
}

#[test]
fn describe_display_is_human_readable() {
    assert_eq!(
        BarcodeKind::Unrecognized { len: 5 }.to_string(),
        "unrecognized (5 chars)"
    );
}
