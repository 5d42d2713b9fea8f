use super::provider::{CallSite, call_sites, pseudocommand_site};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn innermost_unmatched_paren_comes_first() {
    let sites = call_sites(&chars("  :draw(sin(x), 1, "));
    assert_eq!(sites, vec![CallSite {
        name: "draw".to_string(),
        active_parameter: 2,
    }]);

    let nested = call_sites(&chars("  .eval v = clamp(abs(x"));
    assert_eq!(nested[0].name, "abs");
    assert_eq!(nested[1].name, "clamp");
}

#[test]
fn commas_inside_strings_and_closed_parens_are_ignored() {
    let sites = call_sites(&chars("print(\"a,b\", (1,2), "));
    assert_eq!(sites[0].active_parameter, 2);
}

#[test]
fn anonymous_parens_have_no_call_site() {
    assert!(call_sites(&chars("lda #(1+")).is_empty());
    assert!(call_sites(&chars("lda #$10")).is_empty());
}

#[test]
fn pseudocommand_counts_colons() {
    assert_eq!(
        pseudocommand_site(&chars("    mov #1 : ")),
        Some(CallSite {
            name: "mov".to_string(),
            active_parameter: 1
        })
    );
    assert_eq!(pseudocommand_site(&chars("loop: mov ")).map(|c| c.name), Some("mov".to_string()));
    assert!(pseudocommand_site(&chars("    mov")).is_none());
}
