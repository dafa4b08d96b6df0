use crate::config::AppConfig;
use crate::errors::MbtiError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn argon2_params(memory_cost: u32, time_cost: u32, parallelism: u32) -> Result<Params, MbtiError> {
    Params::new(memory_cost, time_cost, parallelism, None)
        .map_err(|e| MbtiError::password_hashing(format!("Invalid argon2 parameters: {e}")))
}

/// 哈希密码（Argon2id，参数来自配置）
pub fn hash_password(password: &str) -> Result<String, MbtiError> {
    let config = &AppConfig::get().argon2;
    let params = argon2_params(config.memory_cost, config.time_cost, config.parallelism)?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MbtiError::password_hashing(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码，参数从哈希串中读取
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("CorrectHorse1").expect("hashable");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("CorrectHorse1", &hash));
        assert!(!verify_password("WrongHorse1", &hash));
    }

    #[test]
    fn test_bad_params_are_hashing_errors() {
        let err = argon2_params(19456, 2, 0).unwrap_err();
        assert!(matches!(err, MbtiError::PasswordHashing(_)));
        assert!(argon2_params(19456, 2, 1).is_ok());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("anything", "plaintext"));
    }
}
