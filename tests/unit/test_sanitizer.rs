use defang::sanitizer::{EXEC_TOKEN, PRINT_TOKEN};
use defang::{SourceDocument, SubstitutionRule};

fn sanitize(source: &SourceDocument) -> defang::SanitizedDocument {
    SubstitutionRule::default().apply(&source.content)
}

#[test]
fn tokens_are_eval_and_print() {
    assert_eq!(EXEC_TOKEN, "eval");
    assert_eq!(PRINT_TOKEN, "print");
}

#[test]
fn sanitize_rewrites_every_occurrence() {
    let source = SourceDocument::new(
        "payload.php",
        "<?php eval(gzinflate(base64_decode($a))); eval($b); ?>".to_string(),
    );
    let doc = sanitize(&source);

    assert_eq!(
        doc.content,
        "<?php print(gzinflate(base64_decode($a))); print($b); ?>"
    );
    assert_eq!(doc.replacements, 2);
    assert_eq!(doc.content.len(), source.content.len() + 2);
}

#[test]
fn sanitize_touches_strings_comments_and_identifiers() {
    let source = SourceDocument::new(
        "x.php",
        "<?php /* eval */ $s = \"medieval\"; function evaluator() {} ?>".to_string(),
    );
    let doc = sanitize(&source);

    assert_eq!(
        doc.content,
        "<?php /* print */ $s = \"mediprint\"; function printuator() {} ?>"
    );
}

#[test]
fn sanitize_without_token_is_identity() {
    let text = "<?php echo \"hi\"; ?>\n";
    let doc = sanitize(&SourceDocument::new("hi.php", text.to_string()));

    assert_eq!(doc.content.as_bytes(), text.as_bytes());
    assert!(doc.is_unchanged());
}

#[test]
fn reversing_the_rule_restores_input() {
    let rule = SubstitutionRule::default();
    let input = "a eval b eval c";
    let doc = rule.apply(input);

    let restored = doc.content.replace(PRINT_TOKEN, EXEC_TOKEN);
    assert_eq!(restored, input);
}
