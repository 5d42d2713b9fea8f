use super::*;

#[test]
fn mnemonics_are_case_insensitive() {
    assert!(is_instruction("lda"));
    assert!(is_instruction("LDA"));
    assert!(!is_instruction("load"));
}

#[test]
fn addressing_suffix_is_ignored() {
    assert_eq!(lookup_instruction("lda.z").map(|e| e.mnemonic), Some("lda"));
    assert_eq!(lookup_instruction("jmp.abs").map(|e| e.mnemonic), Some("jmp"));
}

#[test]
fn undocumented_opcodes_are_known() {
    let lax = lookup_instruction("lax").expect("lax");
    assert!(lax.undocumented);
    assert!(instructions().filter(|e| !e.undocumented).count() == 56);
}

#[test]
fn instruction_documentation_lists_operand_shapes() {
    let doc = lookup_instruction("sty").expect("sty").documentation();
    assert!(doc.starts_with("**STY**"));
    assert!(doc.contains("sty zp,x\n"));
    assert!(!doc.contains("Flags"));
}

#[test]
fn only_argument_taking_directives_take_parameters() {
    assert!(preprocessor_takes_parameters("#if"));
    assert!(preprocessor_takes_parameters("#IMPORTIF"));
    assert!(!preprocessor_takes_parameters("#import"));
    assert!(!preprocessor_takes_parameters("#endif"));
}
