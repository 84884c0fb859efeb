use sptopcli::fragment::{extract, get_access_token, token_from_fragment};

#[test]
fn test_extract_empty_fragment() {
    let map = extract("");

    // Empty input yields an empty mapping, not an error
    assert!(map.is_empty());
    assert_eq!(get_access_token(""), None);
}

#[test]
fn test_extract_simple_pairs() {
    let map = extract("access_token=XYZ&token_type=Bearer&expires_in=3600");

    assert_eq!(map.len(), 3);
    assert_eq!(map["access_token"].as_deref(), Some("XYZ"));
    assert_eq!(map["token_type"].as_deref(), Some("Bearer"));
    assert_eq!(map["expires_in"].as_deref(), Some("3600"));
}

#[test]
fn test_extract_round_trip_with_percent_encoding() {
    // Build the fragment the way the authorization server would: values
    // percent-encoded, pairs joined with '&'
    let pairs = vec![
        ("access_token", "abc 123/+=?"),
        ("state", "nonce&with=specials"),
        ("plain", "value"),
    ];
    let fragment = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let map = extract(&fragment);

    // extract recovers exactly those pairs with percent-decoding applied
    assert_eq!(map.len(), pairs.len());
    for (k, v) in pairs {
        assert_eq!(map[k].as_deref(), Some(v));
    }
}

#[test]
fn test_extract_splits_on_first_equals_only() {
    let map = extract("state=a=b=c");

    // Everything after the first '=' belongs to the value
    assert_eq!(map["state"].as_deref(), Some("a=b=c"));
}

#[test]
fn test_extract_entry_without_equals() {
    let map = extract("access_token=XYZ&malformed");

    // An entry with no '=' maps its key to an absent value, silently
    assert_eq!(map.len(), 2);
    assert_eq!(map["malformed"], None);
    assert_eq!(map["access_token"].as_deref(), Some("XYZ"));
}

#[test]
fn test_extract_repeated_key_last_wins() {
    let map = extract("key=first&key=second");

    assert_eq!(map.len(), 1);
    assert_eq!(map["key"].as_deref(), Some("second"));
}

#[test]
fn test_extract_keeps_undecodable_value_verbatim() {
    // A stray '%' that is not a valid escape must not abort parsing
    let map = extract("broken=100%valid");

    assert_eq!(map["broken"].as_deref(), Some("100%valid"));
}

#[test]
fn test_get_access_token_any_ordering_and_unknown_fields() {
    // Field order is not fixed and unknown fields are tolerated
    let fragment = "expires_in=3600&custom_field=whatever&access_token=XYZ&token_type=Bearer&state=abc";
    assert_eq!(get_access_token(fragment).as_deref(), Some("XYZ"));
}

#[test]
fn test_get_access_token_absent_or_empty() {
    // Missing key
    assert_eq!(get_access_token("token_type=Bearer"), None);

    // Key without a value
    assert_eq!(get_access_token("access_token&token_type=Bearer"), None);

    // Key with an empty value
    assert_eq!(get_access_token("access_token=&token_type=Bearer"), None);
}

#[test]
fn test_token_from_fragment_full() {
    let token =
        token_from_fragment("access_token=XYZ&token_type=Bearer&expires_in=1200&state=abc")
            .expect("fragment carries a token");

    assert_eq!(token.access_token, "XYZ");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 1200);
    assert!(token.obtained_at > 0);
}

#[test]
fn test_token_from_fragment_defaults() {
    // Token type and expiry fall back to Bearer / 3600 when missing
    let token = token_from_fragment("access_token=XYZ").expect("fragment carries a token");

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);

    // A malformed expiry also falls back instead of failing
    let token = token_from_fragment("access_token=XYZ&expires_in=soon")
        .expect("fragment carries a token");
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_token_from_fragment_missing_token() {
    // No access token means "not authenticated", not an error
    assert!(token_from_fragment("token_type=Bearer&expires_in=3600").is_none());
    assert!(token_from_fragment("").is_none());
}
