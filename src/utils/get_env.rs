use anyhow::{Error, anyhow};
use dotenv::dotenv;
use std::env;
use std::str::FromStr;

pub fn get_env_var(key: &str) -> Result<String, Error> {
    dotenv().ok();
    Ok(env::var(key)?)
}

pub fn env_var_to_vec(key: &str) -> Vec<String> {
    match get_env_var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

// unset or blank -> None, present but unparsable -> Err
pub fn parse_env_var<T>(key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("invalid value for {}: {:?} ({})", key, raw, e)),
        _ => Ok(None),
    }
}

pub fn parse_flag(key: &str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("invalid boolean for {}: {:?}", key, other)),
    }
}

pub fn env_flag(key: &str) -> Result<Option<bool>, Error> {
    match get_env_var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_flag(key, &raw).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod cfg_tests {
    use crate::utils::get_env::{env_var_to_vec, parse_env_var, parse_flag};

    #[test]
    pub fn test_parse_flag() {
        assert!(parse_flag("X", "true").unwrap());
        assert!(parse_flag("X", " ON ").unwrap());
        assert!(parse_flag("X", "1").unwrap());
        assert!(!parse_flag("X", "no").unwrap());
        assert!(!parse_flag("X", "False").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }

    #[test]
    pub fn test_env_var_to_vec() {
        unsafe {
            std::env::set_var("PLANT_DETECT_TEST_LIST", " tulsi, ,aloe vera ,");
        }
        assert_eq!(
            env_var_to_vec("PLANT_DETECT_TEST_LIST"),
            vec!["tulsi".to_string(), "aloe vera".to_string()]
        );
        assert!(env_var_to_vec("PLANT_DETECT_TEST_UNSET_LIST").is_empty());
    }

    #[test]
    pub fn test_parse_env_var() {
        unsafe {
            std::env::set_var("PLANT_DETECT_TEST_NUM", "250");
            std::env::set_var("PLANT_DETECT_TEST_BAD_NUM", "quick");
        }
        assert_eq!(parse_env_var::<u64>("PLANT_DETECT_TEST_NUM").unwrap(), Some(250));
        assert!(parse_env_var::<u64>("PLANT_DETECT_TEST_BAD_NUM").is_err());
        assert_eq!(parse_env_var::<u64>("PLANT_DETECT_TEST_UNSET_NUM").unwrap(), None);
    }
}
