use asciidoc_validator::validation::{validate_document, validate_with, Severity, ValidationResult};
use asciidoc_validator::{Collector, DocumentType};

/// A procedure that passes every rule
const CLEAN_PROCEDURE: &str = r#":_mod-docs-content-type: PROCEDURE
[id="proc_installing-the-tool_{context}"]
= Installing the tool

[role="_abstract"]
Install the tool before running any checks.

.Prerequisites

* You have a supported operating system.

.Procedure

. Download the archive:
+
[source,terminal]
----
$ curl -O https://example.com/tool.tar.gz
<<not-an-xref>>
----

. See <<verifying, Verifying the installation>> for the next steps.

[role="_additional-resources"]
.Additional resources
* xref:con_overview.adoc[Overview of the tool]
"#;

fn messages(result: &ValidationResult, rule: &str) -> Vec<String> {
    result.from_rule(rule).map(|f| f.message.clone()).collect()
}

#[test]
fn test_clean_procedure_passes() {
    let result = validate_document("modules/proc_installing-the-tool.adoc", CLEAN_PROCEDURE);

    assert_eq!(result.doc_type, DocumentType::Procedure);
    assert!(result.findings.is_empty(), "unexpected findings: {:?}", result.findings);
    assert!(result.is_valid());
}

#[test]
fn test_abstract_directly_under_heading_short_circuits() {
    let content = "= Example procedure\n[role=\"_abstract\"]\n\nSome prose.\n";
    let result = validate_document("proc_example.adoc", content);

    let abstract_findings = messages(&result, "abstract");
    assert_eq!(abstract_findings.len(), 1);
    assert!(abstract_findings[0].starts_with("no line between the level 1 heading and the abstract tag"));
}

#[test]
fn test_abstract_tag_sharing_a_line_is_still_placed() {
    let result = validate_document("con_a.adoc", "= T\n[role=\"_abstract\"] Text on same line.\n");

    let abstract_findings = messages(&result, "abstract");
    assert_eq!(abstract_findings.len(), 1);
    assert!(abstract_findings[0].starts_with("no line between the level 1 heading and the abstract tag"));
}

#[test]
fn test_missing_abstract_reports_once() {
    for content in ["= Title\n\nText.\n", "", "= Title\n----\n[role=\"_abstract\"]\n----\n"] {
        let result = validate_document("con_a.adoc", content);
        assert_eq!(messages(&result, "abstract"), ["abstract tag is missing"]);
    }
}

#[test]
fn test_well_placed_abstract_has_no_abstract_findings() {
    let content = "= Title\n\n[role=\"_abstract\"]\nThe abstract.\n\nMore text.\n";
    let result = validate_document("ref_a.adoc", content);
    assert!(messages(&result, "abstract").is_empty());
}

#[test]
fn test_vanilla_xref_in_body() {
    let content = "= Title\n\n[role=\"_abstract\"]\nSee <<some-id>> for details.\n";
    let result = validate_document("con_a.adoc", content);

    assert_eq!(messages(&result, "vanilla-xref"), ["vanilla xrefs found"]);
}

#[test]
fn test_vanilla_xref_hidden_by_comments_and_code() {
    let content = "= Title\n\n[role=\"_abstract\"]\nText.\n// <<id>>\n////\n<<id>>\n////\n....\n<<id>>\n....\n";
    let result = validate_document("con_a.adoc", content);

    assert!(messages(&result, "vanilla-xref").is_empty());
}

#[test]
fn test_experimental_tag_declared() {
    let content = ":experimental:\n= Title\n\n[role=\"_abstract\"]\nClick btn:[OK].\n";
    let result = validate_document("proc_a.adoc", content);

    assert!(messages(&result, "experimental-tag").is_empty());
    assert!(result.is_valid());
}

#[test]
fn test_nested_assembly_by_document_type() {
    let body = "= Title\n\n[role=\"_abstract\"]\nText.\n\ninclude::assembly_y.adoc[]\n";

    let assembly = validate_document("assembly_x.adoc", body);
    assert_eq!(messages(&assembly, "nested-assembly"), ["nested assemblies found"]);
    assert!(messages(&assembly, "nested-module").is_empty());

    let procedure = validate_document("proc_x.adoc", body);
    assert!(messages(&procedure, "nested-assembly").is_empty());
    assert_eq!(
        messages(&procedure, "nested-module"),
        ["module contains nested assemblies"]
    );
}

#[test]
fn test_findings_follow_rule_order() {
    let content = "= Using {product} [[anchor]]\nSee <<id>> and xref:a.adoc[].\n\
                   <b>bold</b> btn:[OK]\n.Related information\n";
    let result = validate_document("con_a.adoc", content);

    let rules: Vec<&str> = result.findings.iter().map(|f| f.rule).collect();
    assert_eq!(
        rules,
        [
            "vanilla-xref",
            "variable-in-title",
            "inline-anchor",
            "experimental-tag",
            "html-markup",
            "human-readable-label",
            "abstract",
            "additional-resources"
        ]
    );
    assert!(result.findings.iter().all(|f| f.severity == Severity::Fail));
    assert!(result.findings.iter().all(|f| f.identifier == "con_a.adoc"));
}

#[test]
fn test_reporter_receives_every_finding() {
    let mut collector = Collector::default();
    let result = validate_with("readme.adoc", "<<a>>\n", &mut collector);

    assert_eq!(result.doc_type, DocumentType::Unclassified);
    assert_eq!(collector.into_findings(), result.findings);
}

#[test]
fn test_documents_are_independent() {
    let first = validate_document("con_a.adoc", "<<x>>\n");
    let clean = validate_document("con_b.adoc", "= B\n\n[role=\"_abstract\"]\nB.\n");
    let again = validate_document("con_a.adoc", "<<x>>\n");

    assert!(clean.findings.is_empty());
    assert_eq!(first, again);
}
