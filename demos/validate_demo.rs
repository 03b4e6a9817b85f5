use asciidoc_validator::normalize::PIPELINE;
use asciidoc_validator::report::TextReporter;
use asciidoc_validator::validation::validate_with;
use asciidoc_validator::Reporter;

fn main() {
    println!("=== Normalization and Validation Demo ===");

    let samples = [
        (
            "modules/proc_demo.adoc",
            "= Demo procedure\n[role=\"_abstract\"]\n\nSee <<setup>>.\n",
        ),
        (
            "assemblies/assembly_demo.adoc",
            "= Demo\n\n[role=\"_abstract\"]\nIntro.\n\ninclude::assembly_other.adoc[]\n",
        ),
        (
            "modules/con_demo.adoc",
            "= Demo concept\n\n[role=\"_abstract\"]\nAll good. // hidden remark\n",
        ),
    ];

    let mut reporter = TextReporter::new(std::io::stdout(), false);

    for (identifier, content) in samples {
        println!("\nInput: {}", identifier);

        let mut text = content.to_string();
        for stage in PIPELINE {
            text = (stage.apply)(&text);
            println!("  after {:<22} {:?}", stage.name, text);
        }

        let result = validate_with(identifier, content, &mut reporter);
        println!("Type: {}, valid: {}", result.doc_type, result.is_valid());
    }

    if let Err(e) = reporter.finish() {
        eprintln!("{:#}", e);
    }
}
