use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    types::{RunDescriptor, TestScope},
};

/// The command that would run a descriptor. Never executed by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl TestCommand {
    pub fn for_descriptor(descriptor: &RunDescriptor, config: &Config) -> Self {
        let mut args = vec!["test".to_string()];
        args.extend(config.extra_args.iter().cloned());

        match descriptor.scope() {
            TestScope::Name {
                test_name,
                file_path,
            } => {
                args.push("--plain-name".to_string());
                args.push(test_name.clone());
                args.push(path_arg(file_path));
            }
            TestScope::File { file_path } => args.push(path_arg(file_path)),
            TestScope::Dir { dir_path } => args.push(path_arg(dir_path)),
        }

        Self {
            program: config.command().to_string(),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&shell_quote(arg));
        }
        cmd
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
