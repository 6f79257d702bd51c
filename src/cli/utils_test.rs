use super::utils::truncate_with_ellipsis;

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_with_ellipsis("short", 10), "short");
}

#[test]
fn test_truncate_exact_length_unchanged() {
    assert_eq!(truncate_with_ellipsis("exactly10!", 10), "exactly10!");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(
        truncate_with_ellipsis("this is a very long string", 10),
        "this is..."
    );
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate_with_ellipsis("über über über", 8), "über ...");
}
