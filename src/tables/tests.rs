#[cfg(test)]
mod tests {
    use crate::tables::{TABLE_END, TABLE_START, TableFragment, extract_tables};
    use proptest::prelude::*;

    fn wrap(frag: &str) -> String {
        format!("{}{}{}", TABLE_START, frag, TABLE_END)
    }

    // ========================================================================
    // Basic extraction
    // ========================================================================

    #[test]
    fn test_empty_output() {
        assert!(extract_tables("").is_empty());
    }

    #[test]
    fn test_output_without_markers() {
        assert!(extract_tables("just some logging\nand more").is_empty());
    }

    #[test]
    fn test_single_table_trimmed() {
        let out = "<<<TABLE_START>>> <table><tr><td>x</td></tr></table> <<<TABLE_END>>>";
        let tables = extract_tables(out);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].as_str(), "<table><tr><td>x</td></tr></table>");
    }

    #[test]
    fn test_multiline_segment_trimmed() {
        let out = "<<<TABLE_START>>>\n<h1>dict [2]</h1>\n<table></table>\n<<<TABLE_END>>>\n";
        let tables = extract_tables(out);

        assert_eq!(tables, vec![TableFragment::new("<h1>dict [2]</h1>\n<table></table>")]);
    }

    #[test]
    fn test_multiple_tables_keep_order() {
        let out = format!("{}\n{}\n{}", wrap("A"), wrap("B"), wrap("C"));
        let tables: Vec<String> = extract_tables(&out)
            .into_iter()
            .map(TableFragment::into_string)
            .collect();

        assert_eq!(tables, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_segment_is_kept() {
        let tables = extract_tables(&wrap("   "));
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].as_str(), "");
    }

    // ========================================================================
    // Text outside marker pairs
    // ========================================================================

    #[test]
    fn test_text_before_first_start_ignored() {
        let out = format!("preamble noise{}", wrap("T"));
        assert_eq!(extract_tables(&out), vec![TableFragment::new("T")]);
    }

    #[test]
    fn test_unmatched_trailing_start_ignored() {
        let out = format!("{}{}dangling <table>", wrap("T"), TABLE_START);
        assert_eq!(extract_tables(&out), vec![TableFragment::new("T")]);
    }

    #[test]
    fn test_text_after_stray_end_ignored() {
        let out = format!("{}junk{}more junk", wrap("T"), TABLE_END);
        assert_eq!(extract_tables(&out), vec![TableFragment::new("T")]);
    }

    #[test]
    fn test_stray_end_before_any_start_ignored() {
        let out = format!("before{}after{}", TABLE_END, wrap("T"));
        assert_eq!(extract_tables(&out), vec![TableFragment::new("T")]);
    }

    #[test]
    fn test_start_without_end_followed_by_pair() {
        // The first start has no end of its own before the next start
        let out = format!("{}lost{}", TABLE_START, wrap("kept"));
        assert_eq!(extract_tables(&out), vec![TableFragment::new("kept")]);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    proptest! {
        #[test]
        fn prop_n_pairs_yield_n_fragments(
            frags in prop::collection::vec("[a-zA-Z0-9<>/ \n]{0,24}", 0..8),
            noise in "[a-z \n]{0,16}",
        ) {
            let mut out = noise.clone();
            for frag in &frags {
                out.push_str(&wrap(frag));
                out.push_str(&noise);
            }

            let tables = extract_tables(&out);
            prop_assert_eq!(tables.len(), frags.len());
            for (table, frag) in tables.iter().zip(&frags) {
                prop_assert_eq!(table.as_str(), frag.trim());
            }
        }

        #[test]
        fn prop_outside_text_never_extracted(
            frag in "[A-Z]{1,12}",
            noise in "[a-z]{1,12}",
        ) {
            let out = format!("{noise}{}{noise}{}{noise}{}{noise}", wrap(&frag), TABLE_END, TABLE_START);
            let tables = extract_tables(&out);

            prop_assert_eq!(tables.len(), 1);
            prop_assert!(!tables[0].as_str().contains(&noise));
        }
    }
}
