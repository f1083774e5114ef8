use crate::domain::error::DomainError;

/// Check a raw service name against the naming rules.
///
/// Rules are checked in order and the first failure wins:
///
/// 1. empty                 → [`DomainError::EmptyName`]
/// 2. contains `_`          → [`DomainError::ContainsUnderscore`]
/// 3. contains `-`          → [`DomainError::ContainsHyphen`]
/// 4. not entirely lowercase → [`DomainError::NotLowercase`]
/// 5. `.`, `..` or a path separator → [`DomainError::PathLike`]
///
/// Pure: no I/O.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyName);
    }
    if name.contains('_') {
        return Err(DomainError::ContainsUnderscore { name: name.into() });
    }
    if name.contains('-') {
        return Err(DomainError::ContainsHyphen { name: name.into() });
    }
    if name.to_lowercase() != name {
        return Err(DomainError::NotLowercase { name: name.into() });
    }
    // The name is joined into output paths; it must stay one component.
    if matches!(name, "." | "..") || name.contains(['/', '\\']) {
        return Err(DomainError::PathLike { name: name.into() });
    }
    Ok(())
}
