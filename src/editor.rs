use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

/// Split an editor setting such as `code --wait` into program and arguments.
pub fn editor_command<'a>(editor: &'a str, path: &'a Path) -> Result<(&'a str, Vec<&'a OsStr>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(Error::NoEditor)?;

    let mut args: Vec<&OsStr> = parts.map(OsStr::new).collect();
    args.push(path.as_os_str());
    Ok((program, args))
}

/// Run the editor on `path`, inheriting the terminal, and wait for it to exit.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let (program, args) = editor_command(editor, path)?;

    info!(program, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| Error::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(Error::EditorExit {
            editor: editor.to_string(),
            status,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_command_plain() {
        let path = Path::new("golang/1/solution.go");
        let (program, args) = editor_command("nvim", path).unwrap();
        assert_eq!(program, "nvim");
        assert_eq!(args, vec![OsStr::new("golang/1/solution.go")]);
    }

    #[test]
    fn test_editor_command_with_flags() {
        let path = Path::new("cpp/2/solution.cpp");
        let (program, args) = editor_command("code  --wait", path).unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, vec![OsStr::new("--wait"), OsStr::new("cpp/2/solution.cpp")]);
    }

    #[test]
    fn test_empty_editor() {
        assert!(matches!(editor_command("  ", Path::new("x")), Err(Error::NoEditor)));
    }

    #[test]
    fn test_missing_editor_binary() {
        let err = open_in_editor("leetgrab-no-such-editor-binary", Path::new("x")).unwrap_err();
        assert!(matches!(err, Error::EditorLaunch { .. }));
    }
}
