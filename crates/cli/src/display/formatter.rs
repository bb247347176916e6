use testscope_core::{RunDescriptor, ScopeKind, TestCommand};

pub fn scope_label(kind: ScopeKind) -> &'static str {
    match kind {
        ScopeKind::Name => "🧪 Single test",
        ScopeKind::File => "📄 Test file",
        ScopeKind::Dir => "📁 Test directory",
    }
}

pub fn print_descriptor(descriptor: &RunDescriptor) {
    let scope = descriptor.scope();
    println!("{}: {}", scope_label(scope.kind()), descriptor.name());
    if let Some(name) = scope.test_name() {
        println!("   🏷️  Test name: {}", name);
    }
    if let Some(path) = scope.path() {
        println!("   📂 Path: {}", path.display());
    }
}

pub fn print_command(command: &TestCommand) {
    println!("   🚀 Command: {}", command.to_shell_command());
    if let Some(dir) = &command.working_dir {
        println!("   📍 Working directory: {}", dir.display());
    }
}
