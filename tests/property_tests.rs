//! Property-based tests for normalization, boundaries and urlencoding.

use form_encoding::{normalize, FormDataSet, FormOptions};
use percent_encoding::percent_decode_str;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .expect("ASCII input decodes to UTF-8")
        .into_owned()
}

fn decode_pairs(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .map(|pair| {
            let (name, value) = pair.split_once('=').expect("every pair has '='");
            (decode_component(name), decode_component(value))
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_leaves_only_crlf(s in "[a\r\n]{0,24}") {
        let normalized = normalize(&s);
        let bytes = normalized.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'\r' {
                prop_assert_eq!(bytes.get(i + 1), Some(&b'\n'));
            }
            if *b == b'\n' {
                prop_assert!(i > 0 && bytes[i - 1] == b'\r');
            }
        }
    }

    #[test]
    fn prop_boundary_never_occurs_in_values(
        seed in any::<u64>(),
        values in prop::collection::vec(("[ -~]{0,16}", any::<bool>()), 1..12),
    ) {
        let mut set = FormDataSet::with_rng(StdRng::seed_from_u64(seed));

        for (i, (value, embed)) in values.iter().enumerate() {
            // splice the live boundary into the value to force collisions
            let value = if *embed {
                format!("{value}{}{value}", set.boundary())
            } else {
                value.clone()
            };
            set.append_text(&format!("f{i}"), &value, "text").unwrap();

            let boundary = set.boundary().as_bytes();
            for entry in set.entries() {
                prop_assert!(!entry
                    .payload()
                    .windows(boundary.len())
                    .any(|window| window == boundary));
            }
        }
    }

    #[test]
    fn prop_urlencoded_ascii_round_trip(
        pairs in prop::collection::vec(("[ -~]{1,12}", "[ -~]{0,12}"), 0..8),
    ) {
        let mut set = FormDataSet::new();
        for (name, value) in &pairs {
            set.append_text(name, value, "text").unwrap();
        }

        let body = set.as_url_encoded(&FormOptions::default());
        prop_assert_eq!(decode_pairs(&body), pairs);
    }
}
