use std::fmt;
use std::io;
use std::path::PathBuf;

/*
 * Errors produced while turning user input into a usable directory path.
 * These are surfaced before any operation starts.
 */
#[derive(Debug)]
pub enum ValidationError {
    EmptyInput,
    NotFound(PathBuf),
    NotADirectory(PathBuf),
    Unresolvable(PathBuf, io::Error),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "Path cannot be empty"),
            ValidationError::NotFound(p) => write!(f, "Path does not exist: {}", p.display()),
            ValidationError::NotADirectory(p) => {
                write!(f, "Path is not a directory: {}", p.display())
            }
            ValidationError::Unresolvable(p, e) => {
                write!(f, "Invalid path {}: {e}", p.display())
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::Unresolvable(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Checks that `input` names an existing directory and returns its canonical form.
pub fn validate(input: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let path = PathBuf::from(trimmed);
    if !path.exists() {
        return Err(ValidationError::NotFound(path));
    }
    if !path.is_dir() {
        return Err(ValidationError::NotADirectory(path));
    }

    path.canonicalize()
        .map_err(|e| ValidationError::Unresolvable(path, e))
}
