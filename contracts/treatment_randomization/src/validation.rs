use soroban_sdk::String;

use crate::ContractError;

const MAX_ID_LEN: u32 = 64;

const MIN_NAME_LEN: u32 = 2;
const MAX_NAME_LEN: u32 = 64;

const MAX_DESC_LEN: u32 = 256;

/// Validate a group or patient identifier.
/// Identifiers key ledger entries, so the charset is restricted to
/// [A-Za-z0-9_-] and the length to 1..=MAX_ID_LEN bytes.
pub fn validate_identifier(id: &String) -> Result<(), ContractError> {
    let len = id.len();
    if len == 0 || len > MAX_ID_LEN {
        return Err(ContractError::BadRequest);
    }

    let mut buf = [0u8; MAX_ID_LEN as usize];
    id.copy_into_slice(&mut buf[..len as usize]);

    for &b in &buf[..len as usize] {
        if !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err(ContractError::BadRequest);
        }
    }

    Ok(())
}

/// Validate a group's display name: printable ASCII, MIN_NAME_LEN..=MAX_NAME_LEN bytes.
pub fn validate_group_name(name: &String) -> Result<(), ContractError> {
    let len = name.len();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(ContractError::BadRequest);
    }

    let mut buf = [0u8; MAX_NAME_LEN as usize];
    name.copy_into_slice(&mut buf[..len as usize]);

    if !all_printable_ascii(&buf[..len as usize]) {
        return Err(ContractError::BadRequest);
    }

    Ok(())
}

/// Validate a group description. May be empty; bounded to keep entries small.
pub fn validate_description(description: &String) -> Result<(), ContractError> {
    let len = description.len();
    if len > MAX_DESC_LEN {
        return Err(ContractError::BadRequest);
    }
    if len == 0 {
        return Ok(());
    }

    let mut buf = [0u8; MAX_DESC_LEN as usize];
    description.copy_into_slice(&mut buf[..len as usize]);

    if !all_printable_ascii(&buf[..len as usize]) {
        return Err(ContractError::BadRequest);
    }

    Ok(())
}

/// A capacity must admit at least one patient.
pub fn validate_capacity(max_patients: u32) -> Result<(), ContractError> {
    if max_patients == 0 {
        return Err(ContractError::BadRequest);
    }
    Ok(())
}

// Printable ASCII is space ' ' through tilde '~'.
fn all_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| (32..=126).contains(b))
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_identifier() {
        let env = Env::default();

        // Valid
        assert_eq!(validate_identifier(&String::from_str(&env, "GROUP1")), Ok(()));
        assert_eq!(validate_identifier(&String::from_str(&env, "PT-2024_001")), Ok(()));

        // Empty
        assert_eq!(
            validate_identifier(&String::from_str(&env, "")),
            Err(ContractError::BadRequest)
        );

        // Too long
        let long_id = "A".repeat(65);
        assert_eq!(
            validate_identifier(&String::from_str(&env, &long_id)),
            Err(ContractError::BadRequest)
        );

        // Invalid characters
        assert_eq!(
            validate_identifier(&String::from_str(&env, "GROUP 1")),
            Err(ContractError::BadRequest)
        );
        assert_eq!(
            validate_identifier(&String::from_str(&env, "PT#1")),
            Err(ContractError::BadRequest)
        );
    }

    #[test]
    fn test_validate_group_name() {
        let env = Env::default();

        // Valid
        assert_eq!(
            validate_group_name(&String::from_str(&env, "Placebo")),
            Ok(())
        );
        assert_eq!(
            validate_group_name(&String::from_str(&env, "Treatment A (10mg)")),
            Ok(())
        );

        // Too short
        assert_eq!(
            validate_group_name(&String::from_str(&env, "A")),
            Err(ContractError::BadRequest)
        );

        // Too long
        let long_name = "A".repeat(65);
        assert_eq!(
            validate_group_name(&String::from_str(&env, &long_name)),
            Err(ContractError::BadRequest)
        );

        // Non-printable characters
        assert_eq!(
            validate_group_name(&String::from_str(&env, "Arm\nOne")),
            Err(ContractError::BadRequest)
        );
    }

    #[test]
    fn test_validate_description() {
        let env = Env::default();

        // Valid, including empty
        assert_eq!(validate_description(&String::from_str(&env, "")), Ok(()));
        assert_eq!(
            validate_description(&String::from_str(&env, "Control group")),
            Ok(())
        );

        // Too long
        let long_desc = "d".repeat(257);
        assert_eq!(
            validate_description(&String::from_str(&env, &long_desc)),
            Err(ContractError::BadRequest)
        );

        // Non-printable characters
        assert_eq!(
            validate_description(&String::from_str(&env, "line\tbreak")),
            Err(ContractError::BadRequest)
        );
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(1), Ok(()));
        assert_eq!(validate_capacity(50), Ok(()));
        assert_eq!(validate_capacity(0), Err(ContractError::BadRequest));
    }
}
