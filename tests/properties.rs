//! Property tests for the header rewrite rule
use proptest::prelude::*;
use taxrename::bio::taxonomy::RANK_PREFIXES;
use taxrename::HeaderRewriter;

fn taxon() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_ .-]{1,12}".prop_filter("taxon must not be blank", |s| !s.trim().is_empty())
}

fn sequence_line() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[ACGTUN-]{0,40}[ \t]{0,3}"
}

proptest! {
    #[test]
    fn taxa_are_prefixed_by_position(taxa in prop::collection::vec(taxon(), 0..12)) {
        let mut rewriter = HeaderRewriter::new();
        let header = rewriter.rewrite_line(&format!(">{}", taxa.join(";")));

        let comment = header.strip_prefix(">seq_1 ").expect("header starts with first id");
        let tagged: Vec<&str> = if comment.is_empty() {
            Vec::new()
        } else {
            comment.split(';').collect()
        };
        prop_assert_eq!(tagged.len(), taxa.len());

        for (i, (out, taxon)) in tagged.iter().zip(taxa.iter()).enumerate() {
            let expected = match RANK_PREFIXES.get(i) {
                Some(prefix) => format!("{}{}", prefix, taxon.trim()),
                None => taxon.trim().to_string(),
            };
            prop_assert_eq!(*out, expected.as_str());
        }
    }

    #[test]
    fn kth_header_gets_kth_id(
        records in prop::collection::vec(
            (taxon(), prop::collection::vec(sequence_line(), 0..4)),
            1..20,
        )
    ) {
        let mut rewriter = HeaderRewriter::new();
        let mut k = 0;
        for (lineage, seq_lines) in &records {
            k += 1;
            let header = rewriter.rewrite_line(&format!(">{}", lineage));
            let expected_id = format!(">seq_{} ", k);
            prop_assert!(header.starts_with(&expected_id));

            for line in seq_lines {
                prop_assert_eq!(rewriter.rewrite_line(line), line.trim());
            }
        }
        prop_assert_eq!(rewriter.headers_seen(), records.len() as u64);
    }
}
