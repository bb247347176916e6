use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use testscope_core::resolution::TEST_IDENTIFIER;
use testscope_core::{
    Config, DartSyntax, ExecutionContext, Position, SourcePosition, SyntaxLookup,
    TestConfigProducer,
};
use tracing::debug;

use crate::display::{print_command, print_descriptor};
use crate::utils::{context::absolute_path, resolve_project};

/// List every `test(...)` call in a Dart file with its line and name
pub fn analyze_command(filepath: &str) -> Result<()> {
    debug!("Analyzing file: {}", filepath);

    let path = absolute_path(Path::new(filepath))?;
    if !path.is_file() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }
    let source =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    println!("🔍 Analyzing: {}", filepath);
    println!("{}", "=".repeat(80));

    let config = Config::load_for(&path)?;
    let producer = TestConfigProducer::with_config(config);
    let project = resolve_project(None)?;

    // The file-level result is what a position outside every test yields
    let file_context = ExecutionContext::source(&project, SourcePosition::new(&path, 0));
    match producer.setup_from_context(&file_context) {
        Some(descriptor) => {
            println!("\n📄 File-level target:");
            print_descriptor(&descriptor);
            print_command(&producer.command_for(&descriptor));
        }
        None => println!("\n📄 File-level target: None"),
    }

    let syntax = DartSyntax::new();
    let calls = syntax.calls_named(&source, TEST_IDENTIFIER);
    println!("\n🧪 Found {} test declaration(s):", calls.len());

    for call in &calls {
        let line = Position::from_offset(&source, call.span.start).line + 1;
        let name = syntax
            .first_string_argument(call)
            .map(|literal| syntax.unquote(&literal))
            .filter(|name| !name.is_empty());
        match name {
            Some(name) => println!("   {}:{} {}", filepath, line, name),
            None => println!("   {}:{} <no literal name>", filepath, line),
        }
    }

    Ok(())
}
